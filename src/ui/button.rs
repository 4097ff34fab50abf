use macroquad::prelude::*;

/// Which control a panel button drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Reset,
    Step,
    Center,
    Random,
}

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    action: Action,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, action: Action) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            action,
            color: Color::from_rgba(88, 135, 124, 255),
            hover_color: Color::from_rgba(74, 112, 104, 255),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn contains(&self, (mx, my): (f32, f32)) -> bool {
        mx >= self.x && mx <= self.x + self.width && my >= self.y && my <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) { self.hover_color } else { self.color };

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
