mod button;

pub use button::{Action, Button};

use macroquad::prelude::{screen_height, screen_width};

use crate::application::GameState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Half the side, in cells, of the square filled by the Random button
pub const SOUP_RADIUS: i64 = 20;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create panel buttons; labels follow the current state
pub fn create_buttons(state: &GameState) -> Vec<Button> {
    let px = panel_x();
    let play = if state.is_running { "Pause" } else { "Start" };
    let reset = if state.did_reset { "Clear" } else { "Reset" };
    [
        (play, Action::PlayPause),
        (reset, Action::Reset),
        ("Step", Action::Step),
        ("Center", Action::Center),
        ("Random", Action::Random),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
