//! Game options and configuration
//!
//! Handles user preferences and configuration file loading. The file uses
//! rc-style lines:
//!
//! ```text
//! # guessnum configuration
//! OPTIONS=lower:1,upper:100
//! OPTIONS=name:ada,leaderboard:/home/ada/.local/share/guessnum/leaderboard.txt
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ConfigError;
use crate::session::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub lower_bound: i32,
    pub upper_bound: i32,
    /// Leaderboard file; `None` means the platform default location
    pub leaderboard: Option<PathBuf>,
    /// Default player name
    pub name: Option<String>,
    /// Fixed RNG seed for reproducible targets
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            leaderboard: None,
            name: None,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Load options from a file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, OptionsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    options.parse_option(opt.trim())?;
                }
            } else {
                return Err(OptionsError::ParseError(line.to_string()));
            }
        }

        options.validate()?;
        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }
        match opt.split_once(':').or_else(|| opt.split_once('=')) {
            Some((key, value)) => self.set_option(key.trim(), value.trim()),
            None => Err(OptionsError::MissingValue(opt.to_string())),
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "lower" => self.lower_bound = value.parse().map_err(|_| invalid())?,
            "upper" => self.upper_bound = value.parse().map_err(|_| invalid())?,
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "name" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.name = Some(value.to_string());
            }
            "leaderboard" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.leaderboard = Some(PathBuf::from(value));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Check that the configured bounds describe a non-empty range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lower_bound > self.upper_bound {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# guessnum configuration file".to_string(), String::new()];

        lines.push(format!(
            "OPTIONS=lower:{},upper:{}",
            self.lower_bound, self.upper_bound
        ));
        if let Some(ref name) = self.name {
            lines.push(format!("OPTIONS=name:{}", name));
        }
        if let Some(ref path) = self.leaderboard {
            lines.push(format!("OPTIONS=leaderboard:{}", path.display()));
        }
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{}", seed));
        }

        lines.join("\n") + "\n"
    }
}

/// Options parsing error
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: unrecognized line '{0}'")]
    ParseError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GameOptions::default();
        assert_eq!(opts.lower_bound, 1);
        assert_eq!(opts.upper_bound, 100);
        assert!(opts.leaderboard.is_none());
        assert!(opts.seed.is_none());
    }

    #[test]
    fn test_parse_value_options() {
        let config = "# comment\n\nOPTIONS=lower:-10, upper:10\nOPTIONS=name:ada,seed=99\n";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.lower_bound, -10);
        assert_eq!(opts.upper_bound, 10);
        assert_eq!(opts.name.as_deref(), Some("ada"));
        assert_eq!(opts.seed, Some(99));
    }

    #[test]
    fn test_parse_leaderboard_path() {
        let opts = GameOptions::parse_config("OPTIONS=leaderboard:/var/games/gn.txt").unwrap();
        assert_eq!(opts.leaderboard, Some(PathBuf::from("/var/games/gn.txt")));
    }

    #[test]
    fn test_unknown_option() {
        let err = GameOptions::parse_config("OPTIONS=colour:red").unwrap_err();
        assert!(matches!(err, OptionsError::UnknownOption(ref o) if o == "colour"));
    }

    #[test]
    fn test_invalid_value() {
        let err = GameOptions::parse_config("OPTIONS=upper:lots").unwrap_err();
        assert!(matches!(
            err,
            OptionsError::InvalidValue(ref k, ref v) if k == "upper" && v == "lots"
        ));
    }

    #[test]
    fn test_missing_value() {
        let err = GameOptions::parse_config("OPTIONS=seed").unwrap_err();
        assert!(matches!(err, OptionsError::MissingValue(_)));
    }

    #[test]
    fn test_unrecognized_line() {
        let err = GameOptions::parse_config("BIND=h:hint").unwrap_err();
        assert!(matches!(err, OptionsError::ParseError(_)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = GameOptions::parse_config("OPTIONS=lower:50,upper:5").unwrap_err();
        assert!(matches!(
            err,
            OptionsError::Config(ConfigError::InvalidBounds { lower: 50, upper: 5 })
        ));
    }

    #[test]
    fn test_config_string_round_trip() {
        let opts = GameOptions {
            lower_bound: 3,
            upper_bound: 30,
            leaderboard: Some(PathBuf::from("scores.txt")),
            name: Some("zed".to_string()),
            seed: Some(1234),
        };
        let parsed = GameOptions::parse_config(&opts.to_config_string()).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GameOptions::load_or_default(&dir.path().join("guessnumrc")).unwrap();
        assert_eq!(opts, GameOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guessnumrc");
        let opts = GameOptions {
            upper_bound: 1000,
            ..GameOptions::default()
        };
        opts.save_to_file(&path).unwrap();
        assert_eq!(GameOptions::load_from_file(&path).unwrap(), opts);
    }
}
