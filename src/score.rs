use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Durable home of the best score across runs.
pub trait ScoreStore {
    /// The stored high score, or 0 when nothing usable is stored.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    high_score: u32,
}

/// High score kept as a small JSON file.
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no stored high score");
                return 0;
            }
        };
        // Older saves hold a bare integer.
        serde_json::from_str::<SaveData>(&text)
            .map(|data| data.high_score)
            .or_else(|_| text.trim().parse::<u32>())
            .unwrap_or_else(|_| {
                warn!(path = %self.path.display(), "ignoring unreadable high score file");
                0
            })
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&SaveData { high_score: score })?;
        fs::write(&self.path, text).map_err(|source| StoreError::Write { path: self.path.clone(), source })
    }
}
