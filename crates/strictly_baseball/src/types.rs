//! Core domain types for number baseball.

use super::action::{Attempt, ValidationError};
use super::contracts::LegalGuess;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a secret or a guess.
pub const DIGIT_COUNT: usize = 3;

/// Accepted guesses allowed per round.
pub const MAX_ATTEMPTS: u32 = 10;

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8; DIGIT_COUNT]) -> fmt::Result {
    for digit in digits {
        write!(f, "{}", digit)?;
    }
    Ok(())
}

/// The hidden number for one round.
///
/// Always three pairwise distinct digits with a non-zero first digit.
/// Produced by [`crate::generate_secret`] or parsed under the same rules
/// as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Secret([u8; DIGIT_COUNT]);

impl Secret {
    /// Builds a secret from digits already known to be legal.
    pub(crate) fn from_digits(digits: [u8; DIGIT_COUNT]) -> Self {
        debug_assert!(digits[0] != 0, "secret must not start with zero");
        debug_assert!(
            digits[0] != digits[1] && digits[0] != digits[2] && digits[1] != digits[2],
            "secret digits must be distinct"
        );
        Self(digits)
    }

    /// Parses a secret with the same rules used for guesses.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        LegalGuess::check(input).map(Self)
    }

    /// Returns the digits in order.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }

    /// Returns the digit at `position`, if in range.
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied()
    }

    /// Checks whether the secret contains `digit` anywhere.
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl FromStr for Secret {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Secret {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.to_string()
    }
}

/// A validated guess.
///
/// The only way to obtain one is through validation, so every `Guess`
/// satisfies the same structural rules as a [`Secret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guess([u8; DIGIT_COUNT]);

impl Guess {
    /// Validates raw player input.
    ///
    /// The input is not trimmed or normalized; see [`LegalGuess`] for the
    /// order in which rules are checked.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        LegalGuess::check(input).map(Self)
    }

    /// Returns the digits in order.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl FromStr for Guess {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Guess {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Guess> for String {
    fn from(guess: Guess) -> Self {
        guess.to_string()
    }
}

/// Strike/ball feedback for one guess.
///
/// `strikes + balls` never exceeds [`DIGIT_COUNT`]; both constructors and
/// deserialization enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ScoreParts")]
pub struct Score {
    strikes: u8,
    balls: u8,
}

/// Unchecked wire shape of a [`Score`].
#[derive(Deserialize)]
struct ScoreParts {
    strikes: u8,
    balls: u8,
}

impl TryFrom<ScoreParts> for Score {
    type Error = ScoreError;

    fn try_from(parts: ScoreParts) -> Result<Self, Self::Error> {
        Self::try_new(parts.strikes, parts.balls)
    }
}

/// Strike and ball counts that no guess could produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{} strikes and {} balls exceed {} digits", strikes, balls, DIGIT_COUNT)]
pub struct ScoreError {
    /// Requested strikes.
    pub strikes: u8,
    /// Requested balls.
    pub balls: u8,
}

impl Score {
    /// Creates a score, rejecting counts that exceed the digit count.
    pub fn try_new(strikes: u8, balls: u8) -> Result<Self, ScoreError> {
        if usize::from(strikes) + usize::from(balls) > DIGIT_COUNT {
            return Err(ScoreError { strikes, balls });
        }
        Ok(Self { strikes, balls })
    }

    /// Creates a score.
    ///
    /// # Panics
    ///
    /// Panics if `strikes + balls` exceeds [`DIGIT_COUNT`]. Use
    /// [`Score::try_new`] for counts from outside the engine.
    #[track_caller]
    pub fn new(strikes: u8, balls: u8) -> Self {
        match Self::try_new(strikes, balls) {
            Ok(score) => score,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns the number of strikes.
    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    /// Returns the number of balls.
    pub fn balls(&self) -> u8 {
        self.balls
    }

    /// True when no digit of the guess appears in the secret.
    pub fn is_out(&self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// True when every digit is a strike.
    pub fn is_solved(&self) -> bool {
        usize::from(self.strikes) == DIGIT_COUNT
    }

    /// Digits shared between guess and secret, regardless of position.
    pub fn matched(&self) -> u8 {
        self.strikes + self.balls
    }
}

/// Compact notation: `1S 2B`, `3S`, `2B` or `OUT`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.strikes, self.balls) {
            (0, 0) => write!(f, "OUT"),
            (s, 0) => write!(f, "{}S", s),
            (0, b) => write!(f, "{}B", b),
            (s, b) => write!(f, "{}S {}B", s, b),
        }
    }
}

/// Data shared by every phase of a round: the secret and its attempt record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) secret: Secret,
    pub(crate) attempts_used: u32,
    pub(crate) history: Vec<Attempt>,
}

impl Round {
    /// Creates an empty round around `secret`.
    pub(crate) fn new(secret: Secret) -> Self {
        Self {
            secret,
            attempts_used: 0,
            history: Vec::new(),
        }
    }

    /// Returns the secret.
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the number of accepted guesses so far.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Returns how many guesses are left before the round is lost.
    pub fn remaining(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }

    /// Returns the attempt record in submission order.
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Returns the attempt record most recent first, as displayed to players.
    pub fn history_latest_first(&self) -> impl Iterator<Item = &Attempt> {
        self.history.iter().rev()
    }

    /// Returns the most recent attempt.
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.history.last()
    }

    /// Counts and appends an accepted attempt.
    pub(crate) fn record(&mut self, attempt: Attempt) {
        self.attempts_used += 1;
        self.history.push(attempt);
    }
}
