use macroquad::audio::{Sound, load_sound, load_sound_from_bytes};
use macroquad::prelude::*;
use snake_attack::config::LevelConfig;
use snake_attack::targets::TargetKind;
use tracing::{info, warn};

/// Textures for one level. `None` means the file could not be loaded and
/// the renderer draws a placeholder instead.
pub struct Textures {
    pub background: Option<Texture2D>,
    pub snake_head: Option<Texture2D>,
    pub snake_body: Option<Texture2D>,
    pub targets: [Option<Texture2D>; 2],
}

/// Sound clips keyed by what they are played for. Missing files are replaced by silence.
pub struct Clips {
    pub background: Option<Sound>,
    pub direction_change: Option<Sound>,
    pub target_collect: Option<Sound>,
    pub game_over: Option<Sound>,
}

pub async fn load_textures(level: &LevelConfig) -> Textures {
    let mut targets = [None, None];
    for kind in TargetKind::ALL {
        if let Some(path) = level.targets.get(kind.index()) {
            targets[kind.index()] = load_keyed_texture(path).await;
        }
    }
    Textures {
        background: load_plain_texture(&level.background).await,
        snake_head: load_plain_texture(&level.snake_head).await,
        snake_body: load_plain_texture(&level.snake_body).await,
        targets,
    }
}

async fn load_plain_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            info!(path, "loaded texture");
            Some(texture)
        }
        Err(err) => {
            warn!(path, error = ?err, "texture unavailable, using placeholder");
            None
        }
    }
}

/// Loads a target image and makes every pixel matching its top-left corner transparent.
async fn load_keyed_texture(path: &str) -> Option<Texture2D> {
    let mut image = match load_image(path).await {
        Ok(image) => image,
        Err(err) => {
            warn!(path, error = ?err, "target image unavailable, using placeholder");
            return None;
        }
    };
    if let Some(key) = image.bytes.get(0..4).map(|px| [px[0], px[1], px[2]]) {
        for px in image.bytes.chunks_exact_mut(4) {
            if px[..3] == key {
                px[3] = 0;
            }
        }
    }
    info!(path, "loaded target texture");
    Some(Texture2D::from_image(&image))
}

pub async fn load_clips(level: &LevelConfig) -> Clips {
    let silence = silent_wav(0.5);
    Clips {
        background: load_clip(level, "background", &silence).await,
        direction_change: load_clip(level, "direction_change", &silence).await,
        target_collect: load_clip(level, "target_collect", &silence).await,
        game_over: load_clip(level, "game_over", &silence).await,
    }
}

async fn load_clip(level: &LevelConfig, name: &str, silence: &[u8]) -> Option<Sound> {
    match level.sounds.get(name) {
        Some(path) => match load_sound(path).await {
            Ok(sound) => {
                info!(name, path = %path, "loaded sound");
                return Some(sound);
            }
            Err(err) => warn!(name, path = %path, error = ?err, "sound unavailable, using silence"),
        },
        None => warn!(name, "no sound configured, using silence"),
    }
    load_sound_from_bytes(silence).await.ok()
}

/// PCM16 mono WAV of the given length containing only silence.
fn silent_wav(duration_seconds: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples: u32 = (duration_seconds * sample_rate as f32) as u32;
    let block_align: u16 = 2;
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_size: u32 = num_samples * block_align as u32;
    let mut data: Vec<u8> = Vec::with_capacity(data_size as usize + 44);

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());
    data.resize(data.len() + data_size as usize, 0);
    data
}
