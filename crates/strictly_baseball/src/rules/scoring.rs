//! Strike and ball scoring.

use super::super::{Guess, Score, Secret};
use tracing::instrument;

/// Scores `guess` against `secret` in a single pass.
///
/// A digit in the same position is a strike; otherwise a digit present
/// anywhere in the secret is a ball.
#[instrument(level = "debug", skip(secret))]
pub fn score_guess(guess: &Guess, secret: &Secret) -> Score {
    let mut strikes = 0;
    let mut balls = 0;

    for (position, digit) in guess.digits().into_iter().enumerate() {
        if secret.digit(position) == Some(digit) {
            strikes += 1;
        } else if secret.contains(digit) {
            balls += 1;
        }
    }

    Score::new(strikes, balls)
}
