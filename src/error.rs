use std::path::PathBuf;
use thiserror::Error;

/// Problems found while reading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("no level with id {0}")]
    UnknownLevel(u32),
}

/// Raised when no free interior cell is left for a new target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cell left in the playfield ({occupied} of {capacity} interior cells occupied)")]
    Saturated { occupied: usize, capacity: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write high score to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode high score")]
    Encode(#[from] serde_json::Error),
}
