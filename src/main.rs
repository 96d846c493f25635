use macroquad::prelude::*;
use tracing::{error, info};

use lifelike::{GameState, SimulationConfig, input, rendering, telemetry, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lifelike".to_owned(),
        window_width: 1000,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

/// `--config <path>` selects a JSON config; otherwise defaults apply
fn load_config() -> anyhow::Result<SimulationConfig> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
            return Ok(SimulationConfig::load(path)?);
        }
    }
    Ok(SimulationConfig::default())
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init_logging();

    let mut state = match load_config().and_then(|config| Ok(GameState::new(config)?)) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "Could not start");
            return;
        }
    };
    info!(
        variant = ?state.world.variant(),
        interval_ms = state.scheduler.interval().as_millis() as u64,
        "Window ready"
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&state);

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        let cell_size = rendering::draw_world(&state.world);
        input::handle_mouse_toggle(&mut state, cell_size, mouse_pos);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
