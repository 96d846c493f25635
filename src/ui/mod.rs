mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::GameState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const MAX_CELL_SIZE: f32 = 32.0;

/// Button order, used by input to map clicks to actions
pub const START_STOP: usize = 0;
pub const STEP: usize = 1;
pub const RESET: usize = 2;

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

/// Largest square cell that fits the whole table in an area
pub fn fit_cell_size(columns: usize, rows: usize, area_width: f32, area_height: f32) -> f32 {
    if columns == 0 || rows == 0 {
        return MAX_CELL_SIZE;
    }
    (area_width / columns as f32)
        .min(area_height / rows as f32)
        .clamp(1.0, MAX_CELL_SIZE)
}

/// Create the panel buttons for the current state
pub fn create_buttons(state: &GameState) -> Vec<Button> {
    let px = panel_x();
    let halted = state.halted.is_some();
    let running = state.scheduler.is_running();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, if running { "Stop" } else { "Start" })
            .disabled(halted),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step").disabled(halted || running),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_size_uses_tighter_axis() {
        assert_eq!(fit_cell_size(10, 5, 100.0, 100.0), 10.0);
        assert_eq!(fit_cell_size(5, 10, 100.0, 100.0), 10.0);
    }

    #[test]
    fn test_fit_cell_size_is_clamped() {
        assert_eq!(fit_cell_size(1, 1, 1000.0, 1000.0), MAX_CELL_SIZE);
        assert_eq!(fit_cell_size(10_000, 10, 100.0, 100.0), 1.0);
        assert_eq!(fit_cell_size(0, 0, 100.0, 100.0), MAX_CELL_SIZE);
    }
}
