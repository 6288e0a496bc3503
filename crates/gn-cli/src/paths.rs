//! Default locations for the config file and the leaderboard

use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "guessnum";

/// Default config file, `<config_dir>/guessnum/guessnumrc`
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("guessnumrc");
    path
}

/// Default leaderboard file, `<data_local_dir>/guessnum/leaderboard.txt`.
///
/// Creates the containing directory.
pub fn default_leaderboard_path() -> io::Result<PathBuf> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    std::fs::create_dir_all(&path)?;
    path.push("leaderboard.txt");
    Ok(path)
}
