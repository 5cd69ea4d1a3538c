//! Solved-last invariant: play stops at the first three-strike guess.

use super::super::Round;
use super::Invariant;

/// Invariant: only the final attempt of a round may be a solve.
pub struct SolvedLastInvariant;

impl Invariant<Round> for SolvedLastInvariant {
    fn holds(round: &Round) -> bool {
        match round.history().split_last() {
            Some((_, earlier)) => earlier.iter().all(|attempt| !attempt.score.is_solved()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No attempt follows a three-strike guess"
    }
}
