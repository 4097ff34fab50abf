use std::path::PathBuf;

use anyhow::Context;
use macroquad::prelude::*;
use sparse_life::{
    Config, GameState, Viewport,
    input::{self, PointerState},
    rendering, ui,
};
use tracing::{error, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "Sparse Life".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config path is the optional first argument
fn load_config() -> anyhow::Result<Config> {
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_from_disk(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };
    info!(
        algorithm = config.algorithm.name(),
        updates_per_second = config.updates_per_second,
        "starting"
    );

    let mut state = GameState::new(&config);
    let mut viewport = input::center_viewport(&state, Viewport::new(&config));
    let mut pointer = PointerState::default();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&state);

        (state, viewport) = input::process_button_clicks(state, viewport, &buttons, mouse_pos);
        (state, viewport) = input::handle_pointer(state, viewport, &mut pointer, mouse_pos);
        viewport = input::handle_zoom(viewport, mouse_pos);
        (state, viewport) = input::process_keyboard_input(state, viewport, mouse_pos);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(WHITE);
        rendering::draw_cells(&state, &viewport);
        rendering::draw_controls(&state, &viewport, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
