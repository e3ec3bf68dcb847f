//! Error types
//!
//! Level data problems are fatal at load time. Audio failures are reported
//! to the caller of a sink but never reach the simulation.

use thiserror::Error;

/// Malformed level data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level table is empty")]
    EmptyTable,

    #[error("level {level}: expected {expected} rows, found {found}")]
    RowCount {
        level: usize,
        expected: usize,
        found: usize,
    },

    #[error("level {level} row {row}: expected {expected} columns, found {found}")]
    RowWidth {
        level: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Settings or level file could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid level data: {0}")]
    Level(#[from] LevelError),
}

/// Playback failure reported by an audio sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("unknown sound asset: {0}")]
    MissingAsset(String),

    #[error("audio device unavailable")]
    DeviceUnavailable,
}
