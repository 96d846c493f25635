use macroquad::prelude::*;

use crate::application::{GameState, World};
use crate::domain::{Variant, legend};
use crate::ui::{Button, fit_cell_size, grid_area_height, grid_area_width, panel_x, PANEL_WIDTH};

const WALL_COLOR: Color = Color::new(0.45, 0.45, 0.5, 1.0);
const ORGANISM_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const WALKER_COLOR: Color = Color::new(1.0, 0.65, 0.0, 1.0);
const FLOOR_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

fn cell_color(ch: char, variant: Variant) -> Color {
    match (ch, variant) {
        (legend::WALL, _) => WALL_COLOR,
        (legend::INHABITANT, Variant::Life) => ORGANISM_COLOR,
        (legend::INHABITANT, Variant::Walkers) => WALKER_COLOR,
        _ => FLOOR_COLOR,
    }
}

/// Draw the world's character table scaled to fill the grid area.
/// Returns the cell size used so input can map clicks back to cells.
pub fn draw_world(world: &World) -> f32 {
    let table = world.render_table();
    let rows = table.len();
    let columns = table.first().map_or(0, Vec::len);
    let cell_size = fit_cell_size(columns, rows, grid_area_width(), grid_area_height());
    let draw_lines = cell_size >= 4.0;

    for (y, row) in table.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            let (sx, sy) = (x as f32 * cell_size, y as f32 * cell_size);
            draw_rectangle(sx, sy, cell_size, cell_size, cell_color(ch, world.variant()));
            if draw_lines {
                draw_rectangle_lines(sx, sy, cell_size, cell_size, 1.0, LINE_COLOR);
            }
        }
    }
    cell_size
}

fn draw_label(text: &str, y: f32, size: f32, color: Color) {
    draw_text(text, panel_x(), y, size, color);
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let world = &state.world;
    let (w, h) = world.grid().dimensions();
    let status = match (&state.halted, state.scheduler.is_running()) {
        (Some(_), _) => ("Halted", RED),
        (None, true) => ("Running", GREEN),
        (None, false) => ("Stopped", ORANGE),
    };

    let lines = [
        ("Controls:".to_string(), 190.0, 14.0, WHITE),
        ("Space: Start/Stop".to_string(), 205.0, 12.0, GRAY),
        ("N: Step  R: Reset".to_string(), 218.0, 12.0, GRAY),
        ("Up/Down: Interval".to_string(), 231.0, 12.0, GRAY),
        ("LMB: Toggle cell".to_string(), 244.0, 12.0, GRAY),
        (format!("Grid: {}x{}", w, h), 275.0, 13.0, LIGHTGRAY),
        (format!("Rule: {}", world.rule_name()), 290.0, 13.0, LIGHTGRAY),
        (world.rule_description().to_string(), 303.0, 11.0, GRAY),
        (format!("Generation: {}", world.generation()), 320.0, 16.0, WHITE),
        (format!("Population: {}", world.grid().population()), 340.0, 14.0, ORGANISM_COLOR),
        (format!("Walkers: {}", world.grid().actor_count()), 355.0, 14.0, WALKER_COLOR),
        (format!("Interval: {} ms", state.scheduler.interval().as_millis()), 385.0, 14.0, LIGHTGRAY),
        (format!("Tick: {:.2} ms", state.last_tick_time_ms), 400.0, 13.0, GRAY),
        (status.0.to_string(), 430.0, 16.0, status.1),
    ];
    lines.iter().for_each(|(text, y, size, color)| draw_label(text, *y, *size, *color));

    if let Some(reason) = &state.halted {
        draw_label(reason, 450.0, 11.0, RED);
    }
}
