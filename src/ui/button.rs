use macroquad::prelude::*;

const FONT_SIZE: u16 = 20;

/// Clickable panel button; disabled buttons draw greyed out and ignore clicks
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = match (self.enabled, self.is_hovered(mouse_pos)) {
            (false, _) => Color::from_rgba(60, 60, 60, 255),
            (true, true) => Color::from_rgba(100, 149, 237, 255),
            (true, false) => Color::from_rgba(70, 130, 180, 255),
        };
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, if self.enabled { WHITE } else { GRAY });

        let size = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            FONT_SIZE as f32,
            if self.enabled { WHITE } else { GRAY },
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
