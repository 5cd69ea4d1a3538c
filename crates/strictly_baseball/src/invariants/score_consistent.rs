//! Score consistency invariant: every recorded score is the true score.

use super::super::{Round, score_guess};
use super::Invariant;

/// Invariant: each attempt's score equals `score_guess(guess, secret)`.
///
/// Feedback cannot drift from the secret, even if the record is replayed
/// or deserialized.
pub struct ScoreConsistentInvariant;

impl Invariant<Round> for ScoreConsistentInvariant {
    fn holds(round: &Round) -> bool {
        round
            .history()
            .iter()
            .all(|attempt| score_guess(&attempt.guess, round.secret()) == attempt.score)
    }

    fn description() -> &'static str {
        "Every recorded score matches the secret"
    }
}
