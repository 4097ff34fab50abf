mod config;
mod game_state;
mod viewport;

pub use config::{Config, ConfigError};
pub use game_state::GameState;
pub use viewport::Viewport;
