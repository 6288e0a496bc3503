//! gn-cli: Line-oriented terminal front end
//!
//! Reads menu choices and guesses line by line, renders outcomes as text,
//! and records wins on the leaderboard.

pub mod app;
pub mod display;
pub mod input;
pub mod paths;

pub use app::App;
pub use input::{GuessCommand, InputError, MenuChoice};
