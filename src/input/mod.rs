use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Point;
use crate::ui::{self, grid_area_width};

/// Toggle the organism under the cursor while stopped
pub fn handle_mouse_toggle(state: &mut GameState, cell_size: f32, mouse_pos: (f32, f32)) {
    if state.scheduler.is_running()
        || mouse_pos.0 >= grid_area_width()
        || !is_mouse_button_pressed(MouseButton::Left)
    {
        return;
    }
    let pos = Point::new(
        (mouse_pos.0 / cell_size).floor() as i32,
        (mouse_pos.1 / cell_size).floor() as i32,
    );
    state.world.toggle_at(pos);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::R, GameState::reset),
        (KeyCode::Up, |s| s.adjust_interval(100)),
        (KeyCode::Down, |s| s.adjust_interval(-100)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[ui::Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                ui::START_STOP => s.toggle_running(),
                ui::STEP => s.step(),
                ui::RESET => s.reset(),
                _ => s,
            }
        })
}
