//! Contract-based validation for number baseball.
//!
//! Guess validation is a chain of preconditions, each a named rule checked
//! in a fixed order. Round transitions are wrapped by a [`Contract`] whose
//! postcondition re-checks every invariant in debug builds.

use super::action::ValidationError;
use super::invariants::{BaseballInvariants, InvariantSet};
use super::types::{DIGIT_COUNT, Guess, MAX_ATTEMPTS, Round};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying action
/// - Postcondition: {Q(before, after)} must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractViolation>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A broken pre- or postcondition. Always an engine bug, never player error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Contract violation: {}", description)]
pub struct ContractViolation {
    /// What went wrong.
    pub description: String,
}

impl ContractViolation {
    /// Creates a new violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Rule 1: the input is exactly three characters.
pub struct ExactLength;

impl ExactLength {
    /// Splits the input into exactly [`DIGIT_COUNT`] characters.
    #[instrument(level = "debug")]
    pub fn check(input: &str) -> Result<[char; DIGIT_COUNT], ValidationError> {
        let chars: Vec<char> = input.chars().collect();
        <[char; DIGIT_COUNT]>::try_from(chars).map_err(|_| ValidationError::Length {
            input: input.to_string(),
        })
    }
}

/// Rule 2: the first character is not '0'.
pub struct NoLeadingZero;

impl NoLeadingZero {
    /// Rejects input whose first character is '0'.
    #[instrument(level = "debug", skip(chars))]
    pub fn check(input: &str, chars: &[char; DIGIT_COUNT]) -> Result<(), ValidationError> {
        if chars[0] == '0' {
            Err(ValidationError::LeadingZero {
                input: input.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Rule 3: every character is a decimal digit.
pub struct AllDigits;

impl AllDigits {
    /// Converts the characters to digit values.
    #[instrument(level = "debug", skip(chars))]
    pub fn check(
        input: &str,
        chars: &[char; DIGIT_COUNT],
    ) -> Result<[u8; DIGIT_COUNT], ValidationError> {
        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, c) in digits.iter_mut().zip(chars) {
            let value = c.to_digit(10).ok_or_else(|| ValidationError::NonDigit {
                input: input.to_string(),
            })?;
            // to_digit(10) never exceeds 9
            *slot = value as u8;
        }
        Ok(digits)
    }
}

/// Rule 4: no digit appears twice.
pub struct DistinctDigits;

impl DistinctDigits {
    /// Rejects digits that repeat.
    #[instrument(level = "debug", skip(digits))]
    pub fn check(input: &str, digits: &[u8; DIGIT_COUNT]) -> Result<(), ValidationError> {
        let repeated = digits
            .iter()
            .enumerate()
            .any(|(i, d)| digits[i + 1..].contains(d));
        if repeated {
            Err(ValidationError::DuplicateDigit {
                input: input.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: all guess rules, first failure wins.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates raw input and returns its digits.
    #[instrument(level = "debug")]
    pub fn check(input: &str) -> Result<[u8; DIGIT_COUNT], ValidationError> {
        let chars = ExactLength::check(input)?;
        NoLeadingZero::check(input, &chars)?;
        let digits = AllDigits::check(input, &chars)?;
        DistinctDigits::check(input, &digits)?;
        Ok(digits)
    }
}

// ─────────────────────────────────────────────────────────────
//  Round Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round still has attempts left.
pub struct AttemptsRemain;

impl AttemptsRemain {
    /// Fails once [`MAX_ATTEMPTS`] guesses have been recorded.
    #[instrument(skip(round), fields(attempts_used = round.attempts_used()))]
    pub fn check(round: &Round) -> Result<(), ContractViolation> {
        if round.attempts_used() >= MAX_ATTEMPTS {
            warn!("Submission attempted on an exhausted round");
            Err(ContractViolation::new(format!(
                "No attempts remain ({} of {} used)",
                round.attempts_used(),
                MAX_ATTEMPTS
            )))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Submit Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for submitting a validated guess to a round.
///
/// Preconditions:
/// - Attempts remain
///
/// Postconditions:
/// - Exactly one attempt was counted and appended
/// - Earlier attempts are untouched
/// - All round invariants hold
pub struct SubmitContract;

impl Contract<Round, Guess> for SubmitContract {
    fn pre(round: &Round, _guess: &Guess) -> Result<(), ContractViolation> {
        AttemptsRemain::check(round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), ContractViolation> {
        if after.attempts_used() != before.attempts_used() + 1 {
            return Err(ContractViolation::new(format!(
                "Attempt counter moved from {} to {}",
                before.attempts_used(),
                after.attempts_used()
            )));
        }

        if !after.history().starts_with(before.history()) {
            return Err(ContractViolation::new("Earlier attempts were modified"));
        }

        if after.secret() != before.secret() {
            return Err(ContractViolation::new("Secret changed mid-round"));
        }

        BaseballInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Panics in debug builds when a contract check failed.
pub(crate) fn assert_contract(result: Result<(), ContractViolation>) {
    if let Err(violation) = &result {
        tracing::error!(%violation, "Contract violated");
    }
    debug_assert!(result.is_ok(), "{:?}", result);
}
