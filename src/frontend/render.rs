use super::assets::Textures;
use super::input::Button;
use macroquad::prelude::*;
use snake_attack::{Game, GameState, TargetKind};

const WALL_SAND: Color = Color::new(0.78, 0.67, 0.51, 1.0);
const WALL_EDGE: Color = Color::new(0.75, 0.63, 0.47, 1.0);
const FALLBACK_BACKGROUND: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const FALLBACK_HEAD: Color = Color::new(0.1, 0.45, 0.1, 1.0);
const FALLBACK_BODY: Color = Color::new(0.2, 0.65, 0.2, 1.0);
const FALLBACK_TARGET: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const BANNER_DARK: Color = Color::new(0.75, 0.63, 0.47, 1.0);
const BANNER_LIGHT: Color = Color::new(0.82, 0.71, 0.55, 1.0);

const TITLE: &str = "Snake Attack!!!";
const INSTRUCTIONS: [&str; 5] = [
    "How to Play:",
    "- Use Arrow Keys to control the snake's direction",
    "- Collect targets to grow and score points",
    "- Avoid hitting walls and yourself",
    "- Press any Arrow Key to start moving",
];

/// Draws one frame from the game's read-only data.
pub struct Renderer {
    textures: Textures,
}

impl Renderer {
    pub fn new(textures: Textures) -> Self {
        Self { textures }
    }

    pub fn draw(&self, game: &Game, start_button: &Button) {
        clear_background(BLACK);
        self.draw_background(game);
        draw_walls(game);

        match game.state() {
            GameState::Menu => draw_menu(game, start_button),
            GameState::Playing => self.draw_playing(game),
            GameState::GameOver => draw_game_over(game),
        }
    }

    fn draw_background(&self, game: &Game) {
        let grid = game.grid();
        let (w, h) = (grid.width as f32, grid.height as f32);
        match &self.textures.background {
            Some(texture) => draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams { dest_size: Some(vec2(w, h)), ..Default::default() },
            ),
            None => draw_rectangle(0.0, 0.0, w, h, FALLBACK_BACKGROUND),
        }
    }

    fn draw_playing(&self, game: &Game) {
        let grid = game.grid();
        let size = grid.cell_size as f32;

        for target in game.targets().iter() {
            let (x, y) = grid.cell_to_px(target.cell);
            let (x, y) = (x as f32, y as f32);
            match &self.textures.targets[target.kind.index()] {
                Some(texture) => draw_sprite(texture, x, y, size, 0.0),
                None => draw_circle(x + size / 2.0, y + size / 2.0, size / 2.0, target_color(target.kind)),
            }
        }

        // Every segment shares the head's orientation; angles are counter-clockwise degrees.
        let snake = game.snake();
        let rotation = -snake.render_angle().to_radians();
        for (i, cell) in snake.positions().enumerate() {
            let (x, y) = grid.cell_to_px(cell);
            let (x, y) = (x as f32, y as f32);
            let (texture, fallback) = if i == 0 {
                (&self.textures.snake_head, FALLBACK_HEAD)
            } else {
                (&self.textures.snake_body, FALLBACK_BODY)
            };
            match texture {
                Some(texture) => draw_sprite(texture, x, y, size, rotation),
                None => draw_rectangle(x, y, size, size, fallback),
            }
        }

        draw_text(&format!("Score: {}", game.score()), 10.0, 26.0, 36.0, WHITE);
    }
}

fn target_color(kind: TargetKind) -> Color {
    match kind {
        TargetKind::Primary => FALLBACK_TARGET,
        TargetKind::Secondary => ORANGE,
    }
}

fn draw_sprite(texture: &Texture2D, x: f32, y: f32, size: f32, rotation: f32) {
    let params = DrawTextureParams { dest_size: Some(vec2(size, size)), rotation, ..Default::default() };
    draw_texture_ex(texture, x, y, WHITE, params);
}

fn draw_walls(game: &Game) {
    let size = game.grid().cell_size as f32;
    for wall in game.walls() {
        let (x, y, w, h) = (wall.x as f32, wall.y as f32, wall.w as f32, wall.h as f32);
        draw_rectangle(x, y, w, h, WALL_SAND);
        draw_rectangle_lines(x, y, w, h, size / 10.0, WALL_EDGE);
    }
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color, width: f32) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (width - m.width) * 0.5, y, font_size as f32, color);
}

fn draw_menu(game: &Game, start_button: &Button) {
    let width = game.grid().width as f32;

    let title = measure_text(TITLE, None, 74, 1.0);
    let padding = 40.0;
    let (bw, bh) = (title.width + padding * 2.0, title.height + padding);
    let (bx, by) = (width / 2.0 - bw / 2.0, 120.0);
    draw_rectangle(bx, by, bw, bh, BANNER_DARK);
    draw_rectangle(bx + 5.0, by + 5.0, bw - 10.0, bh - 10.0, BANNER_LIGHT);
    draw_text(TITLE, bx + padding, by + padding / 2.0 + title.offset_y, 74.0, WHITE);

    let rect = start_button.rect;
    let fill = if start_button.hovered { start_button.hover_color() } else { start_button.color };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
    let label = measure_text(start_button.label, None, 50, 1.0);
    draw_text(
        start_button.label,
        rect.x + (rect.w - label.width) / 2.0,
        rect.y + (rect.h + label.offset_y) / 2.0,
        50.0,
        WHITE,
    );

    let mut y = 370.0;
    for line in INSTRUCTIONS {
        draw_centered(line, y, 30, WHITE, width);
        y += 40.0;
    }
}

fn draw_game_over(game: &Game) {
    let width = game.grid().width as f32;
    let lines = [
        "Game Over".to_string(),
        format!("Score: {}", game.score()),
        format!("High Score: {}", game.high_score()),
        "Press SPACE to Restart".to_string(),
    ];
    let mut y = 180.0;
    for line in &lines {
        draw_centered(line, y, 64, WHITE, width);
        y += 100.0;
    }
}
