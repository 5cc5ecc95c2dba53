//! Snake Attack - rules and state for a single-screen snake game.
//!
//! The library holds everything that decides what happens in the game and has no window,
//! asset or audio dependencies. The binary wraps it in a macroquad front end.

pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod score;
pub mod snake;
pub mod targets;

pub use config::GameConfig;
pub use error::{ConfigError, SpawnError, StoreError};
pub use game::{AudioCue, Game, GameState, Input};
pub use geometry::{Cell, Grid, Rect};
pub use score::{HighScoreFile, ScoreStore};
pub use snake::{Direction, Snake};
pub use targets::{Target, TargetKind, TargetSet};
