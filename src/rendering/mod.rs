use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::CellPos;
use crate::ui::{Button, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const GRID_LINE: Color = Color::new(0.463, 0.706, 0.651, 1.0);
const ALIVE: Color = Color::new(0.580, 0.882, 0.816, 1.0);
const PANEL: Color = Color::new(0.404, 0.616, 0.569, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw grid lines, scrolled by the camera's sub-cell offset.
fn draw_grid_lines(viewport: &Viewport, width: f32, height: f32) {
    let pitch = viewport.pitch() as f32;
    let side = viewport.cell_side() as f32;
    let spacing = viewport.cell_spacing() as f32;
    if spacing <= 0.0 || pitch < 3.0 {
        return;
    }
    let (phase_x, phase_y) = viewport.grid_phase();

    let mut x = phase_x as f32 + side;
    while x < width {
        draw_rectangle(x, 0.0, spacing, height, GRID_LINE);
        x += pitch;
    }
    let mut y = phase_y as f32 + side;
    while y < height {
        draw_rectangle(0.0, y, width, spacing, GRID_LINE);
        y += pitch;
    }
}

/// Draw the live cells inside the visible range
pub fn draw_cells(state: &GameState, viewport: &Viewport) {
    let width = grid_area_width();
    let height = grid_area_height();
    let side = viewport.cell_side() as f32;

    draw_rectangle(0.0, 0.0, width, height, BACKGROUND);
    draw_grid_lines(viewport, width, height);

    let (min, max) = viewport.visible_cells(width as f64, height as f64);
    for (&row, columns) in state.cells.rows() {
        if row < min.row || row > max.row {
            continue;
        }
        for &col in columns {
            if col < min.col || col > max.col {
                continue;
            }
            let (px, py) = viewport.cell_to_pixel(CellPos::new(row, col));
            draw_rectangle(px as f32, py as f32, side, side, ALIVE);
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and stats
pub fn draw_controls(state: &GameState, viewport: &Viewport, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        "Controls:",
        "Drag: Pan",
        "Click: Toggle cell",
        "Wheel/+/-: Zoom",
        "Space: Play  N: Step",
        "R: Reset  C: Center",
        "G: Random  P: Engine",
        "1-0: Stamp preset",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, LIGHTGRAY) };
        draw_text_label(text, px + 6.0, 290.0 + i as f32 * 14.0, size, color);
    });

    let (row, col) = (viewport.y.floor() as i64, viewport.x.floor() as i64);
    let labels = [
        format!("Generation: {}", state.generation),
        format!("Population: {}", format_number(state.cells.population())),
        format!("Speed: {:.0} gen/s", state.updates_per_second),
        format!("Zoom: {:.2}x", viewport.zoom),
        format!("Camera: {}, {}", row, col),
        format!("Engine: {}", state.algorithm.name()),
        state.algorithm.description().to_string(),
        format!("Evolve: {:.2}ms", state.last_evolution_time_ms),
        format!("Render: {:.2}ms", state.last_render_time_ms),
        format!("FPS: {}", get_fps()),
        (if state.is_running { "Running" } else { "Paused" }).to_string(),
    ];
    labels.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, px + 6.0, 420.0 + i as f32 * 18.0, 15.0, WHITE);
    });
}
