//! gn-core: Core game logic for guessnum
//!
//! This crate contains the guessing session and the leaderboard with no
//! terminal I/O. Randomness and leaderboard storage are passed in by the
//! caller, so everything here is deterministic under test.

pub mod error;
pub mod leaderboard;
pub mod options;
pub mod session;

mod rng;

pub use error::{ConfigError, EntryError, LeaderboardError, StorageError};
pub use leaderboard::{
    FileStorage, Leaderboard, LeaderboardEntry, LeaderboardStorage, MemoryStorage,
};
pub use options::{GameOptions, OptionsError};
pub use rng::{GameRng, RangePicker};
pub use session::{GuessSession, HintRange, Outcome, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
