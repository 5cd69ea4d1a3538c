//! Attempt bound invariant: the counter matches the record and never exceeds the limit.

use super::super::{MAX_ATTEMPTS, Round};
use super::Invariant;

/// Invariant: `attempts_used` equals the record length and is at most [`MAX_ATTEMPTS`].
pub struct AttemptBoundInvariant;

impl Invariant<Round> for AttemptBoundInvariant {
    fn holds(round: &Round) -> bool {
        let counted = round.attempts_used();
        counted <= MAX_ATTEMPTS && counted as usize == round.history().len()
    }

    fn description() -> &'static str {
        "Attempt counter matches the record and stays within the limit"
    }
}
