use macroquad::prelude::*;
use snake_attack::{Direction, GameState, Input};

/// Clickable menu button.
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Color,
    pub hovered: bool,
}

impl Button {
    /// The start button, centred horizontally near the top of the menu.
    pub fn start(window_width: f32) -> Self {
        let (w, h) = (200.0, 60.0);
        Self {
            rect: Rect::new(window_width / 2.0 - w / 2.0, 250.0, w, h),
            label: "Start",
            color: Color::from_rgba(34, 177, 76, 255),
            hovered: false,
        }
    }

    pub fn hover_color(&self) -> Color {
        let lift = 30.0 / 255.0;
        Color::new((self.color.r + lift).min(1.0), (self.color.g + lift).min(1.0), (self.color.b + lift).min(1.0), 1.0)
    }

    fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.rect.x && x < self.rect.right() && y >= self.rect.y && y < self.rect.bottom()
    }
}

fn key_for(direction: Direction) -> KeyCode {
    match direction {
        Direction::Up => KeyCode::Up,
        Direction::Down => KeyCode::Down,
        Direction::Left => KeyCode::Left,
        Direction::Right => KeyCode::Right,
    }
}

/// Translates this frame's key and mouse events into game inputs.
pub fn poll(state: GameState, start_button: &mut Button) -> Vec<Input> {
    let mut inputs = Vec::new();

    start_button.hovered = state == GameState::Menu && start_button.contains(mouse_position());
    if start_button.hovered && is_mouse_button_pressed(MouseButton::Left) {
        inputs.push(Input::Start);
    }

    inputs.extend(Direction::ALL.into_iter().filter(|d| is_key_pressed(key_for(*d))).map(Input::Steer));

    if is_key_pressed(KeyCode::Space) {
        inputs.push(Input::Restart);
    }
    inputs
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
