// Domain layer - sparse cell space and the generation engine
pub mod domain;

// Application layer - viewport, configuration and game state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, CellPos, CellSpace, LifeError, Pattern, next_generation, presets};
pub use application::{Config, ConfigError, GameState, Viewport};
