use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::application::{GameState, Viewport};
use crate::domain::presets;
use crate::ui::{Action, Button, SOUP_RADIUS, grid_area_height, grid_area_width};

/// Pointer travel in pixels before a press counts as a drag instead of a click
const DRAG_THRESHOLD: f32 = 4.0;
/// Zoom multiplier per wheel notch or key press
const ZOOM_STEP: f64 = 1.1;

/// Tracks a left-button press across frames
#[derive(Default)]
pub struct PointerState {
    pressed_at: Option<(f32, f32)>,
    last: Option<(f32, f32)>,
    dragging: bool,
}

fn canvas_size() -> (f64, f64) {
    (grid_area_width() as f64, grid_area_height() as f64)
}

fn in_grid_area(mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 < grid_area_width()
}

/// Left-drag pans the viewport; a press released without dragging toggles
/// the cell under the pointer.
pub fn handle_pointer(
    state: GameState,
    viewport: Viewport,
    pointer: &mut PointerState,
    mouse_pos: (f32, f32),
) -> (GameState, Viewport) {
    if is_mouse_button_pressed(MouseButton::Left) && in_grid_area(mouse_pos) {
        *pointer = PointerState {
            pressed_at: Some(mouse_pos),
            last: Some(mouse_pos),
            dragging: false,
        };
        return (state, viewport);
    }

    let (Some(pressed_at), Some(last)) = (pointer.pressed_at, pointer.last) else {
        return (state, viewport);
    };

    if is_mouse_button_down(MouseButton::Left) {
        let travelled = (mouse_pos.0 - pressed_at.0).hypot(mouse_pos.1 - pressed_at.1);
        pointer.dragging |= travelled > DRAG_THRESHOLD;
        pointer.last = Some(mouse_pos);
        if !pointer.dragging {
            return (state, viewport);
        }
        let viewport = viewport.pan((mouse_pos.0 - last.0) as f64, (mouse_pos.1 - last.1) as f64);
        return (state, viewport);
    }

    // Released
    let was_drag = pointer.dragging;
    *pointer = PointerState::default();
    if was_drag {
        return (state, viewport);
    }
    let pos = viewport.resolve_cell(pressed_at.0 as f64, pressed_at.1 as f64);
    debug!(row = pos.row, col = pos.col, "toggled cell");
    (state.toggle_cell(pos), viewport)
}

/// Wheel zooms about the pointer
pub fn handle_zoom(viewport: Viewport, mouse_pos: (f32, f32)) -> Viewport {
    if !in_grid_area(mouse_pos) {
        return viewport;
    }
    let wheel = mouse_wheel().1;
    let factor = if wheel > 0.0 {
        ZOOM_STEP
    } else if wheel < 0.0 {
        1.0 / ZOOM_STEP
    } else {
        return viewport;
    };
    let (width, height) = canvas_size();
    viewport.zoom_by(factor, mouse_pos.0 as f64, mouse_pos.1 as f64, width, height)
}

/// Bring the weighted centroid of the live cells to the middle of the canvas.
pub fn center_viewport(state: &GameState, viewport: Viewport) -> Viewport {
    let (width, height) = canvas_size();
    match state.cells.center(true) {
        Ok((x, y)) => viewport.center_on(x, y, width, height),
        Err(err) => {
            warn!(%err, "nothing to center on");
            viewport
        }
    }
}

fn randomize_around_center(state: GameState, viewport: &Viewport) -> GameState {
    let (width, height) = canvas_size();
    let center = viewport.resolve_cell(width / 2.0, height / 2.0);
    state.randomize(center, SOUP_RADIUS)
}

fn apply(action: Action, state: GameState, viewport: Viewport) -> (GameState, Viewport) {
    match action {
        Action::PlayPause => (state.toggle_running(), viewport),
        Action::Reset => (state.reset(), viewport),
        Action::Step => (state.step(), viewport),
        Action::Center => {
            let viewport = center_viewport(&state, viewport);
            (state, viewport)
        }
        Action::Random => (randomize_around_center(state, &viewport), viewport),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: GameState,
    viewport: Viewport,
    mouse_pos: (f32, f32),
) -> (GameState, Viewport) {
    let actions = [
        (KeyCode::Space, Action::PlayPause),
        (KeyCode::R, Action::Reset),
        (KeyCode::N, Action::Step),
        (KeyCode::C, Action::Center),
        (KeyCode::G, Action::Random),
    ];

    let (mut state, mut viewport) = actions.iter().fold((state, viewport), |(s, v), (key, action)| {
        if is_key_pressed(*key) { apply(*action, s, v) } else { (s, v) }
    });

    if is_key_pressed(KeyCode::Up) {
        state = state.adjust_speed(1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        state = state.adjust_speed(-1.0);
    }
    if is_key_pressed(KeyCode::P) {
        state = state.toggle_algorithm();
    }

    let (width, height) = canvas_size();
    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        viewport = viewport.zoom_by(ZOOM_STEP, width / 2.0, height / 2.0, width, height);
    }
    if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        viewport = viewport.zoom_by(1.0 / ZOOM_STEP, width / 2.0, height / 2.0, width, height);
    }

    // Digit keys stamp a preset under the pointer
    let digits = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
        KeyCode::Key8,
        KeyCode::Key9,
        KeyCode::Key0,
    ];
    if in_grid_area(mouse_pos) {
        let patterns = presets::all_patterns();
        for (key, pattern) in digits.iter().zip(patterns.iter()) {
            if is_key_pressed(*key) {
                let pos = viewport.resolve_cell(mouse_pos.0 as f64, mouse_pos.1 as f64);
                state = state.place_pattern(pattern, pos);
            }
        }
    }

    (state, viewport)
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    viewport: Viewport,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> (GameState, Viewport) {
    buttons.iter().fold((state, viewport), |(s, v), button| {
        if button.is_clicked(mouse_pos) { apply(button.action(), s, v) } else { (s, v) }
    })
}
