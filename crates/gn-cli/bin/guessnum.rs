//! guessnum: guess the number, climb the leaderboard
//!
//! Main entry point for the game.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gn_cli::{App, display, input, paths};
use gn_core::{FileStorage, GameOptions, GameRng, Leaderboard};

/// Number-guessing game with a persisted leaderboard
#[derive(Parser, Debug)]
#[command(name = "guessnum")]
#[command(
    author,
    version,
    about = "Guess the number in as few attempts as you can",
    long_about = None
)]
struct Args {
    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Lowest possible target
    #[arg(long = "lower", allow_hyphen_values = true)]
    lower: Option<i32>,

    /// Highest possible target
    #[arg(long = "upper", allow_hyphen_values = true)]
    upper: Option<i32>,

    /// Leaderboard file
    #[arg(long = "leaderboard")]
    leaderboard: Option<PathBuf>,

    /// Seed for reproducible targets
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// View the leaderboard and exit
    #[arg(short = 's', long = "scores")]
    scores: bool,

    /// Verbose logging (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Command-line values take precedence over the config file
    fn apply_to(&self, options: &mut GameOptions) {
        if let Some(lower) = self.lower {
            options.lower_bound = lower;
        }
        if let Some(upper) = self.upper {
            options.upper_bound = upper;
        }
        if let Some(ref path) = self.leaderboard {
            options.leaderboard = Some(path.clone());
        }
        if let Some(ref name) = self.name {
            options.name = Some(name.clone());
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.clone().unwrap_or_else(paths::default_config_path);
    let mut options = match args.config {
        // An explicitly named config file must exist.
        Some(ref path) => GameOptions::load_from_file(path)?,
        None => GameOptions::load_or_default(&config_path)?,
    };
    debug!(config = %config_path.display(), "loaded options");

    args.apply_to(&mut options);
    options.validate()?;
    if let Some(ref name) = options.name {
        input::parse_player_name(name)?;
    }

    let leaderboard_path = match options.leaderboard.clone() {
        Some(path) => path,
        None => paths::default_leaderboard_path()?,
    };
    let leaderboard = Leaderboard::load(FileStorage::new(&leaderboard_path))?;
    info!(path = %leaderboard_path.display(), entries = leaderboard.len(), "leaderboard loaded");

    // View leaderboard
    if args.scores {
        let mut stdout = io::stdout().lock();
        display::write_score_table(&mut stdout, leaderboard.entries())?;
        if args.verbose > 0 {
            writeln!(stdout, "\n(Leaderboard file: {})", leaderboard_path.display())?;
        }
        return Ok(());
    }

    let rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    debug!(seed = rng.seed(), "target picker ready");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut app = App::new(stdin, stdout, rng, leaderboard)
        .with_bounds(options.lower_bound, options.upper_bound)
        .with_player_name(options.name);
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let mut options = GameOptions::parse_config("OPTIONS=lower:5,upper:50,name:cfg").unwrap();
        let args = Args::parse_from(["guessnum", "--upper", "500", "-u", "cli"]);
        args.apply_to(&mut options);

        assert_eq!(options.lower_bound, 5);
        assert_eq!(options.upper_bound, 500);
        assert_eq!(options.name.as_deref(), Some("cli"));
    }

    #[test]
    fn test_negative_bounds_and_verbosity() {
        let args = Args::parse_from(["guessnum", "--lower", "-20", "--upper", "-1", "-vv"]);
        assert_eq!(args.lower, Some(-20));
        assert_eq!(args.upper, Some(-1));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_inverted_cli_bounds_fail_validation() {
        let mut options = GameOptions::default();
        Args::parse_from(["guessnum", "--lower", "10", "--upper", "1"]).apply_to(&mut options);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
