use crate::error::ConfigError;
use crate::geometry::Grid;
use crate::targets::{TargetKind, TARGETS_PER_KIND};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Highest logic rate accepted for `window.fps`.
pub const MAX_FPS: u32 = 240;

/// Full game configuration, read once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub snake: SnakeConfig,
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub grid: GridConfig,
    pub levels: Vec<LevelConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    pub fps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub initial_length: usize,
    /// Moves per `base_tick_rate` ticks.
    pub initial_speed: f32,
    pub targets_before_speedup: u32,
    pub speed_increase_amount: f32,
    pub max_speed: f32,
    #[serde(default = "default_base_tick_rate")]
    pub base_tick_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub target_1_points: u32,
    pub target_2_points: u32,
}

impl ScoringConfig {
    pub fn points_for(&self, kind: TargetKind) -> u32 {
        match kind {
            TargetKind::Primary => self.target_1_points,
            TargetKind::Secondary => self.target_2_points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cell_size: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 30 }
    }
}

/// Asset paths for one level. Assets are optional at runtime; the front end
/// falls back to placeholders when a file cannot be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub background: String,
    pub snake_head: String,
    pub snake_body: String,
    pub targets: Vec<String>,
    #[serde(default)]
    pub sounds: BTreeMap<String, String>,
}

fn default_title() -> String {
    "Snake Attack!!!".to_string()
}

fn default_base_tick_rate() -> u32 {
    60
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(&self.window, self.grid.cell_size)
    }

    pub fn level(&self, id: u32) -> Result<&LevelConfig, ConfigError> {
        self.levels.iter().find(|level| level.id == id).ok_or(ConfigError::UnknownLevel(id))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.window.fps == 0 || self.window.fps > MAX_FPS {
            return invalid(format!("window.fps must be in 1..={MAX_FPS}, got {}", self.window.fps));
        }
        if self.grid.cell_size <= 0 {
            return invalid(format!("grid.cell_size must be positive, got {}", self.grid.cell_size));
        }

        let snake = &self.snake;
        if snake.initial_length == 0 {
            return invalid("snake.initial_length must be at least 1".into());
        }
        if snake.base_tick_rate == 0 {
            return invalid("snake.base_tick_rate must be positive".into());
        }
        if snake.initial_speed <= 0.0 {
            return invalid(format!("snake.initial_speed must be positive, got {}", snake.initial_speed));
        }
        if snake.speed_increase_amount < 0.0 {
            return invalid("snake.speed_increase_amount must not be negative".into());
        }
        if snake.max_speed < snake.initial_speed {
            return invalid(format!(
                "snake.max_speed ({}) is below snake.initial_speed ({})",
                snake.max_speed, snake.initial_speed
            ));
        }

        // The starting body extends left of the spawn cell and every target needs its own cell.
        let grid = self.grid();
        let head = grid.spawn_cell();
        let tail_x = head.x - (snake.initial_length as i32 - 1);
        if !grid.is_interior(head) || tail_x < 1 {
            return invalid(format!(
                "a {}x{} window cannot fit a snake of length {}",
                self.window.width, self.window.height, snake.initial_length
            ));
        }
        let needed = snake.initial_length + TARGETS_PER_KIND * TargetKind::ALL.len();
        if grid.interior_capacity() <= needed {
            return invalid(format!(
                "playfield has {} free cells, need more than {needed}",
                grid.interior_capacity()
            ));
        }

        if self.levels.is_empty() {
            return invalid("at least one level is required".into());
        }
        let mut ids = HashSet::new();
        for level in &self.levels {
            if !ids.insert(level.id) {
                return invalid(format!("duplicate level id {}", level.id));
            }
            if level.targets.len() != TargetKind::ALL.len() {
                return invalid(format!(
                    "level {} lists {} target images, expected {}",
                    level.id,
                    level.targets.len(),
                    TargetKind::ALL.len()
                ));
            }
        }
        Ok(())
    }
}
