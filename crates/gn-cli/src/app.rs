//! Menu loop driving a guessing session and the leaderboard

use std::io::{self, BufRead, Write};

use gn_core::{GuessSession, Leaderboard, LeaderboardStorage, Outcome, RangePicker};
use tracing::{info, warn};

use crate::display;
use crate::input::{self, GuessCommand, MenuChoice};

/// Whether the menu loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented game front end
pub struct App<R, W, P, S: LeaderboardStorage> {
    input: R,
    output: W,
    picker: P,
    leaderboard: Leaderboard<S>,
    bounds: (i32, i32),
    player_name: Option<String>,
}

impl<R, W, P, S> App<R, W, P, S>
where
    R: BufRead,
    W: Write,
    P: RangePicker,
    S: LeaderboardStorage,
{
    pub fn new(input: R, output: W, picker: P, leaderboard: Leaderboard<S>) -> Self {
        Self {
            input,
            output,
            picker,
            leaderboard,
            bounds: (gn_core::DEFAULT_LOWER_BOUND, gn_core::DEFAULT_UPPER_BOUND),
            player_name: None,
        }
    }

    /// Use `[lower, upper]` for new sessions
    pub fn with_bounds(mut self, lower: i32, upper: i32) -> Self {
        self.bounds = (lower, upper);
        self
    }

    /// Skip the name prompt and play as `name`
    pub fn with_player_name(mut self, name: Option<String>) -> Self {
        self.player_name = name;
        self
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the player exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            display::write_menu(&mut self.output)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match input::parse_menu_choice(&line) {
                Ok(MenuChoice::Play) => self.play()?,
                Ok(MenuChoice::Leaderboard) => {
                    display::write_leaderboard(&mut self.output, self.leaderboard.entries())?;
                    Flow::Continue
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for playing! Goodbye!")?;
                    Flow::Quit
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()
    }

    fn play(&mut self) -> io::Result<Flow> {
        let name = match self.player_name.clone() {
            Some(name) => name,
            None => match self.ask_name()? {
                Some(name) => name,
                None => return Ok(Flow::Quit),
            },
        };

        let (lower, upper) = self.bounds;
        let mut session = match GuessSession::new(lower, upper, &mut self.picker) {
            Ok(session) => session,
            Err(e) => {
                writeln!(self.output, "Cannot start a game: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "I have selected a number between {lower} and {upper}. Can you guess it?"
        )?;
        writeln!(
            self.output,
            "Type 'hint' to get a hint about the range of the number."
        )?;

        loop {
            let Some(line) = self.prompt("Enter your guess: ")? else {
                return Ok(Flow::Quit);
            };

            match input::parse_guess_command(&line) {
                Ok(GuessCommand::Hint) => {
                    writeln!(self.output, "{}", display::hint_message(&session.hint()))?;
                }
                Ok(GuessCommand::Guess(number)) => {
                    let outcome = session.submit_guess(number);
                    writeln!(self.output, "{}", display::outcome_message(&outcome))?;
                    if let Outcome::Correct { attempts, .. } = outcome {
                        self.record(&name, attempts)?;
                        return Ok(Flow::Continue);
                    }
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number or type 'hint' for a hint."
                    )?;
                }
            }
        }
    }

    fn record(&mut self, name: &str, attempts: u32) -> io::Result<()> {
        match self.leaderboard.add_entry(name, attempts) {
            Ok(rank) => {
                info!(player = name, attempts, rank, "game won");
                writeln!(self.output, "You placed #{rank} on the leaderboard.")
            }
            Err(e) => {
                warn!(error = %e, "result not saved");
                writeln!(self.output, "Your result could not be saved: {e}")
            }
        }
    }

    fn ask_name(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt("Enter your name: ")? else {
                return Ok(None);
            };
            match input::parse_player_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => writeln!(self.output, "Invalid name: {e}. Please use a single word.")?,
            }
        }
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
