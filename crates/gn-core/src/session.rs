//! Guessing session state machine
//!
//! A session owns a hidden target drawn once at creation and tracks every
//! guess submitted against it. Outcomes are structured values; turning them
//! into player-facing text is left to the front end.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::rng::RangePicker;

/// Lower bound used when no bounds are configured
pub const DEFAULT_LOWER_BOUND: i32 = 1;

/// Upper bound used when no bounds are configured
pub const DEFAULT_UPPER_BOUND: i32 = 100;

/// Result of a single guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The number was already accepted earlier in this session
    AlreadyGuessed(i32),
    /// The number lies outside the session bounds
    OutOfBounds { low: i32, high: i32 },
    /// The number is the target
    Correct { target: i32, attempts: u32 },
    TooLow,
    TooHigh,
}

impl Outcome {
    /// Whether this outcome ends the session
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Correct { .. })
    }
}

/// Closed sub-range of the session bounds known to contain the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRange {
    pub low: i32,
    pub high: i32,
}

impl HintRange {
    pub fn contains(&self, n: i32) -> bool {
        self.low <= n && n <= self.high
    }

    /// Number of integers in the range
    pub fn len(&self) -> u64 {
        (i64::from(self.high) - i64::from(self.low) + 1) as u64
    }

    /// Always false; a hint range holds at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One round of the guessing game, from target selection to win
#[derive(Debug, Clone)]
pub struct GuessSession {
    lower_bound: i32,
    upper_bound: i32,
    target: i32,
    attempts: u32,
    seen: BTreeSet<i32>,
}

impl GuessSession {
    /// Start a session over `[lower, upper]`, drawing the target from `picker`.
    pub fn new(
        lower: i32,
        upper: i32,
        picker: &mut impl RangePicker,
    ) -> Result<Self, ConfigError> {
        if lower > upper {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }

        let target = picker.pick(lower, upper);
        if !(lower..=upper).contains(&target) {
            return Err(ConfigError::TargetOutOfRange {
                target,
                lower,
                upper,
            });
        }
        info!(lower, upper, "new guessing session");

        Ok(Self {
            lower_bound: lower,
            upper_bound: upper,
            target,
            attempts: 0,
            seen: BTreeSet::new(),
        })
    }

    /// Start a session over `[DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND]`
    pub fn with_default_bounds(picker: &mut impl RangePicker) -> Result<Self, ConfigError> {
        Self::new(DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, picker)
    }

    /// Submit a guess.
    ///
    /// Every call counts as an attempt, including duplicates and guesses
    /// outside the bounds. Only in-range, first-time guesses are recorded.
    pub fn submit_guess(&mut self, number: i32) -> Outcome {
        self.attempts = self.attempts.saturating_add(1);

        let outcome = if self.seen.contains(&number) {
            Outcome::AlreadyGuessed(number)
        } else if number < self.lower_bound || number > self.upper_bound {
            Outcome::OutOfBounds {
                low: self.lower_bound,
                high: self.upper_bound,
            }
        } else {
            self.seen.insert(number);
            if number == self.target {
                Outcome::Correct {
                    target: self.target,
                    attempts: self.attempts,
                }
            } else if number < self.target {
                Outcome::TooLow
            } else {
                Outcome::TooHigh
            }
        };

        debug!(number, attempts = self.attempts, ?outcome, "guess submitted");
        outcome
    }

    /// Half of the session range that contains the target.
    ///
    /// Does not count as an attempt.
    pub fn hint(&self) -> HintRange {
        // Floor division in i64 keeps negative bounds and i32 extremes exact.
        let mid = (i64::from(self.lower_bound) + i64::from(self.upper_bound)).div_euclid(2) as i32;
        if self.target <= mid {
            HintRange {
                low: self.lower_bound,
                high: mid,
            }
        } else {
            HintRange {
                low: mid + 1,
                high: self.upper_bound,
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Session bounds as `(lower, upper)`
    pub fn bounds(&self) -> (i32, i32) {
        (self.lower_bound, self.upper_bound)
    }

    /// Accepted guesses in ascending order
    pub fn guesses(&self) -> &BTreeSet<i32> {
        &self.seen
    }

    /// Whether the target has been guessed
    pub fn is_solved(&self) -> bool {
        self.seen.contains(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    struct FixedPicker(i32);

    impl RangePicker for FixedPicker {
        fn pick(&mut self, _low: i32, _high: i32) -> i32 {
            self.0
        }
    }

    fn session(lower: i32, upper: i32, target: i32) -> GuessSession {
        GuessSession::new(lower, upper, &mut FixedPicker(target)).unwrap()
    }

    #[test]
    fn test_new_session_is_fresh() {
        let s = session(1, 100, 42);
        assert_eq!(s.attempts(), 0);
        assert!(s.guesses().is_empty());
        assert_eq!(s.bounds(), (1, 100));
        assert!(!s.is_solved());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = GuessSession::new(10, 1, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBounds { lower: 10, upper: 1 });
    }

    #[test]
    fn test_default_bounds() {
        let s = GuessSession::with_default_bounds(&mut GameRng::new(3)).unwrap();
        assert_eq!(s.bounds(), (DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND));
    }

    #[test]
    fn test_picker_outside_bounds_rejected() {
        let err = GuessSession::new(1, 10, &mut FixedPicker(50)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TargetOutOfRange {
                target: 50,
                lower: 1,
                upper: 10
            }
        );

        let err = GuessSession::with_default_bounds(&mut FixedPicker(0)).unwrap_err();
        assert!(matches!(err, ConfigError::TargetOutOfRange { target: 0, .. }));
    }

    #[test]
    fn test_directional_feedback() {
        let mut s = session(1, 100, 50);
        assert_eq!(s.submit_guess(10), Outcome::TooLow);
        assert_eq!(s.submit_guess(90), Outcome::TooHigh);
        assert_eq!(
            s.submit_guess(50),
            Outcome::Correct {
                target: 50,
                attempts: 3
            }
        );
        assert!(s.is_solved());
    }

    #[test]
    fn test_duplicate_counts_but_is_not_recorded_twice() {
        let mut s = session(1, 100, 50);
        s.submit_guess(20);
        assert_eq!(s.submit_guess(20), Outcome::AlreadyGuessed(20));
        assert_eq!(s.attempts(), 2);
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_not_recorded() {
        let mut s = session(1, 10, 5);
        assert_eq!(s.submit_guess(0), Outcome::OutOfBounds { low: 1, high: 10 });
        assert_eq!(s.submit_guess(11), Outcome::OutOfBounds { low: 1, high: 10 });
        // An out-of-range number never becomes "already guessed".
        assert_eq!(s.submit_guess(11), Outcome::OutOfBounds { low: 1, high: 10 });
        assert_eq!(s.attempts(), 3);
        assert!(s.guesses().is_empty());
    }

    #[test]
    fn test_guess_after_win_is_duplicate() {
        let mut s = session(1, 10, 3);
        assert!(s.submit_guess(3).is_win());
        assert_eq!(s.submit_guess(3), Outcome::AlreadyGuessed(3));
    }

    #[test]
    fn test_scripted_round() {
        let mut s = session(1, 10, 7);
        let outcomes: Vec<Outcome> = [5, 5, 11, 7].iter().map(|&n| s.submit_guess(n)).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::TooLow,
                Outcome::AlreadyGuessed(5),
                Outcome::OutOfBounds { low: 1, high: 10 },
                Outcome::Correct {
                    target: 7,
                    attempts: 4
                },
            ]
        );
    }

    #[test]
    fn test_hint_halves() {
        assert_eq!(session(1, 100, 50).hint(), HintRange { low: 1, high: 50 });
        assert_eq!(session(1, 100, 51).hint(), HintRange { low: 51, high: 100 });
        assert_eq!(session(1, 100, 1).hint(), HintRange { low: 1, high: 50 });
    }

    #[test]
    fn test_hint_is_stable_and_free() {
        let s = session(1, 100, 77);
        let first = s.hint();
        for _ in 0..5 {
            assert_eq!(s.hint(), first);
        }
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn test_hint_negative_and_single_value_ranges() {
        // floor((-5 + 0) / 2) == -3
        assert_eq!(session(-5, 0, -3).hint(), HintRange { low: -5, high: -3 });
        assert_eq!(session(-5, 0, -2).hint(), HintRange { low: -2, high: 0 });
        assert_eq!(session(4, 4, 4).hint(), HintRange { low: 4, high: 4 });
    }

    #[test]
    fn test_hint_extreme_bounds() {
        let s = session(i32::MIN, i32::MAX, i32::MAX);
        let hint = s.hint();
        assert_eq!(hint.low, 0);
        assert_eq!(hint.high, i32::MAX);
        assert!(hint.contains(i32::MAX));
    }

    #[test]
    fn test_hint_range_len() {
        assert_eq!(HintRange { low: 1, high: 50 }.len(), 50);
        assert_eq!(HintRange { low: i32::MIN, high: i32::MAX }.len(), 1 << 32);
    }
}
