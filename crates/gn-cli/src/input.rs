//! Input handling - convert typed lines to commands
//!
//! Every parser returns a `Result`; nothing here panics on bad input.

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuChoice {
    Play,
    Leaderboard,
    Exit,
}

impl MenuChoice {
    /// Number the player types to select this entry
    pub fn key(self) -> u32 {
        match self {
            MenuChoice::Play => 1,
            MenuChoice::Leaderboard => 2,
            MenuChoice::Exit => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Play => "Play the game",
            MenuChoice::Leaderboard => "View leaderboard",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// A line typed during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessCommand {
    Hint,
    Guess(i32),
}

/// Rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a menu option")]
    UnknownChoice(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("a name is required")]
    EmptyName,

    #[error("'{0}' contains spaces")]
    NameHasSpaces(String),
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    let line = line.trim();
    line.parse::<u32>()
        .ok()
        .and_then(|key| MenuChoice::iter().find(|c| c.key() == key))
        .ok_or_else(|| InputError::UnknownChoice(line.to_string()))
}

/// Parse a guess, or the word `hint`
pub fn parse_guess_command(line: &str) -> Result<GuessCommand, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("hint") {
        return Ok(GuessCommand::Hint);
    }
    line.parse::<i32>()
        .map(GuessCommand::Guess)
        .map_err(|_| InputError::NotANumber(line.to_string()))
}

/// Parse a player name; leaderboard names are a single word
pub fn parse_player_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(InputError::NameHasSpaces(name.to_string()));
    }
    Ok(name.to_string())
}
