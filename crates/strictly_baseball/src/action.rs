//! First-class attempt, outcome and error types.
//!
//! An accepted guess becomes an [`Attempt`]: a domain event that is
//! recorded, replayed and checked by contracts. Rejections are values too,
//! so a front end decides how to surface them.

use super::phases::Outcome;
use super::types::{DIGIT_COUNT, Guess, Score, Secret};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// One accepted guess together with its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attempt {
    /// The guess that was submitted.
    pub guess: Guess,
    /// The score it received.
    pub score: Score,
}

impl Attempt {
    /// Creates a new attempt record.
    #[instrument(level = "debug")]
    pub fn new(guess: Guess, score: Score) -> Self {
        Self { guess, score }
    }

    /// Returns the guess.
    pub fn guess(&self) -> Guess {
        self.guess
    }

    /// Returns the score.
    pub fn score(&self) -> Score {
        self.score
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.guess, self.score)
    }
}

/// Why raw input was rejected as a guess.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, strum::IntoStaticStr,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    /// Input is not exactly three characters long.
    #[display("Expected exactly {} digits, got {:?}", DIGIT_COUNT, input)]
    Length {
        /// The rejected input.
        input: String,
    },

    /// Input starts with '0'.
    #[display("A guess cannot start with 0: {:?}", input)]
    LeadingZero {
        /// The rejected input.
        input: String,
    },

    /// Input contains something other than a decimal digit.
    #[display("Only digits are allowed: {:?}", input)]
    NonDigit {
        /// The rejected input.
        input: String,
    },

    /// A digit appears more than once.
    #[display("Digits must all be different: {:?}", input)]
    DuplicateDigit {
        /// The rejected input.
        input: String,
    },
}

impl ValidationError {
    /// Stable machine-readable label (`length`, `leading_zero`, ...).
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Returns the input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::Length { input }
            | ValidationError::LeadingZero { input }
            | ValidationError::NonDigit { input }
            | ValidationError::DuplicateDigit { input } => input,
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error returned when a guess cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SubmitError {
    /// The input failed validation; no attempt was consumed.
    #[display("{}", _0)]
    Invalid(ValidationError),

    /// No round is active (not started yet, or already won or lost).
    #[display("No round is active; start a new game first")]
    NotActive,
}

impl SubmitError {
    /// Stable machine-readable label.
    ///
    /// Validation failures report the specific rule that failed.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Invalid(err) => err.kind(),
            SubmitError::NotActive => self.into(),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Invalid(err) => Some(err),
            SubmitError::NotActive => None,
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Invalid(err)
    }
}

/// Result of an accepted guess, as seen by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The round goes on; carries only the current score.
    Continue(Score),
    /// Three strikes.
    Won {
        /// Attempts used, including the winning one.
        attempts: u32,
    },
    /// Attempts exhausted without a win.
    Lost {
        /// The secret, revealed.
        secret: Secret,
    },
}

impl SubmitOutcome {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmitOutcome::Continue(_))
    }
}

impl From<Outcome> for SubmitOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won { attempts } => SubmitOutcome::Won { attempts },
            Outcome::Lost { secret } => SubmitOutcome::Lost { secret },
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Continue(score) => write!(f, "{}", score),
            SubmitOutcome::Won { attempts } => write!(f, "Won in {} attempts", attempts),
            SubmitOutcome::Lost { secret } => write!(f, "Lost, the secret was {}", secret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_kind() {
        let err = ValidationError::LeadingZero {
            input: "012".to_string(),
        };
        assert_eq!(err.kind(), "leading_zero");
        assert_eq!(err.input(), "012");
        assert!(err.to_string().contains("cannot start with 0"));
    }

    #[test]
    fn test_submit_error_kind_delegates() {
        let err: SubmitError = ValidationError::DuplicateDigit {
            input: "122".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "duplicate_digit");
        assert_eq!(SubmitError::NotActive.kind(), "not_active");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_error_json() {
        let err = ValidationError::Length {
            input: "1123".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "length");
        assert_eq!(json["input"], "1123");
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(SubmitOutcome::Continue(Score::new(1, 2))).unwrap();
        assert_eq!(json["outcome"], "continue");
        assert_eq!(json["strikes"], 1);
        assert_eq!(json["balls"], 2);

        let json = serde_json::to_value(SubmitOutcome::Won { attempts: 4 }).unwrap();
        assert_eq!(json["outcome"], "won");
        assert_eq!(json["attempts"], 4);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(SubmitOutcome::Continue(Score::new(0, 0)).to_string(), "OUT");
        assert!(SubmitOutcome::Won { attempts: 1 }.is_terminal());
    }
}
