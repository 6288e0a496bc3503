//! Error types shared across the core

use std::path::PathBuf;

use thiserror::Error;

/// Invalid session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid bounds: lower bound {lower} is greater than upper bound {upper}")]
    InvalidBounds { lower: i32, upper: i32 },

    #[error("Picked target {target} lies outside bounds {lower}..={upper}")]
    TargetOutOfRange { target: i32, lower: i32, upper: i32 },
}

/// Failure reading or writing the leaderboard backing store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not read leaderboard '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write leaderboard '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Leaderboard storage unavailable: {0}")]
    Unavailable(String),
}

/// A leaderboard entry that cannot be represented in the flat record format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Player name '{0}' must be a single word")]
    WhitespaceInName(String),

    #[error("Attempt count must be at least 1")]
    ZeroAttempts,
}

/// Errors from leaderboard mutations
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
