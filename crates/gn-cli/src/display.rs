//! Player-facing text for outcomes, hints and the leaderboard

use std::io::{self, Write};

use gn_core::{HintRange, LeaderboardEntry, Outcome};
use strum::IntoEnumIterator;

use crate::input::MenuChoice;

pub fn outcome_message(outcome: &Outcome) -> String {
    match *outcome {
        Outcome::AlreadyGuessed(n) => {
            format!("You've already guessed {n}. Try a different number.")
        }
        Outcome::OutOfBounds { low, high } => format!(
            "Your guess is out of bounds. Please guess a number between {low} and {high}."
        ),
        Outcome::Correct { target, attempts } => format!(
            "Congratulations! You've guessed the correct number {target} in {attempts} attempts."
        ),
        Outcome::TooLow => "Too low! Try again.".to_string(),
        Outcome::TooHigh => "Too high! Try again.".to_string(),
    }
}

pub fn hint_message(hint: &HintRange) -> String {
    if hint.low == hint.high {
        format!("The number is {}.", hint.low)
    } else {
        format!("The number is between {} and {}.", hint.low, hint.high)
    }
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Options:")?;
    for choice in MenuChoice::iter() {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

pub fn write_leaderboard(out: &mut impl Write, entries: &[LeaderboardEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No entries in the leaderboard yet.");
    }

    writeln!(out, "Leaderboard:")?;
    for entry in entries {
        writeln!(out, "{}: {} attempts", entry.player_name(), entry.attempts())?;
    }
    Ok(())
}

/// Ranked table for `guessnum --scores`
pub fn write_score_table(out: &mut impl Write, entries: &[LeaderboardEntry]) -> io::Result<()> {
    writeln!(out, "\n=== guessnum Leaderboard ===\n")?;
    if entries.is_empty() {
        return writeln!(out, "No entries in the leaderboard yet.");
    }

    writeln!(out, "{:<4} {:<20} {:<10}", "Rank", "Player", "Attempts")?;
    writeln!(out, "{:-<36}", "")?;
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<20} {:<10}",
            rank + 1,
            entry.player_name(),
            entry.attempts()
        )?;
    }
    Ok(())
}
