mod algorithm;
mod cell;
mod cell_space;
mod error;
pub mod generation;
mod patterns;

pub use algorithm::Algorithm;
pub use cell::{Cell, CellPos};
pub use cell_space::{Bounds, CellSpace, Row};
pub use error::LifeError;
pub use generation::{next_generation, next_generation_parallel};
pub use patterns::{Pattern, presets};
