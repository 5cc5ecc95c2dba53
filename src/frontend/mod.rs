//! macroquad front end: window loop, assets, drawing, sound and input.

mod assets;
mod audio;
mod input;
mod render;

use anyhow::{Context, Result};
use macroquad::prelude::*;
use snake_attack::{Game, GameConfig};
use tracing::{debug, info};

/// Longest frame time fed into the tick accumulator, so a stalled window does not fast-forward the game.
const MAX_FRAME_TIME: f32 = 0.25;

/// Most core ticks run per rendered frame; lag beyond this is dropped.
const MAX_TICKS_PER_FRAME: u32 = 8;

pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Runs the game until the player quits. Ticks the core at a fixed `fps` regardless of the display rate.
pub async fn run(mut game: Game, level_id: u32) -> Result<()> {
    let level = game.config().level(level_id)?.clone();
    let renderer = render::Renderer::new(assets::load_textures(&level).await);
    let audio = audio::AudioPlayer::new(assets::load_clips(&level).await);
    let mut start_button = input::Button::start(game.grid().width as f32);

    let step = 1.0 / game.config().window.fps as f32;
    let mut lag = 0.0;
    info!(level = level.id, fps = game.config().window.fps, "entering main loop");

    loop {
        if input::quit_requested() {
            info!("quit requested");
            break;
        }

        for event in input::poll(game.state(), &mut start_button) {
            game.handle_input(event).context("failed to reset the run")?;
        }

        lag += get_frame_time().min(MAX_FRAME_TIME);
        let mut ticks = 0;
        while lag >= step {
            if ticks == MAX_TICKS_PER_FRAME {
                debug!(dropped = lag, "tick budget exhausted for this frame");
                lag = 0.0;
                break;
            }
            game.tick().context("failed to advance the game")?;
            lag -= step;
            ticks += 1;
        }

        audio.play(&game.take_cues());
        renderer.draw(&game, &start_button);

        next_frame().await;
    }
    Ok(())
}
