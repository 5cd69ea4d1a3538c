//! Phase-specific typestate structs for a round.
//!
//! Each phase is its own type. A `RoundFinished` ALWAYS has an outcome,
//! and only a `RoundInProgress` accepts guesses, so submitting to a
//! finished round does not compile.

use super::action::Attempt;
use super::contracts::{Contract, SubmitContract, assert_contract};
use super::phases::Outcome;
use super::rng::GameRng;
use super::rules::{generate_secret, score_guess};
use super::types::{Guess, MAX_ATTEMPTS, Round, Score, Secret};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round not started yet. No secret, no attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSetup;

impl RoundSetup {
    /// Creates a round in setup phase.
    pub fn new() -> Self {
        Self
    }

    /// Draws a secret and starts the round.
    #[instrument(skip(self, rng), fields(seed = rng.seed()))]
    pub fn start(self, rng: &mut GameRng) -> RoundInProgress {
        let secret = generate_secret(rng);
        self.start_with_secret(secret)
    }

    /// Starts the round around a known secret.
    #[instrument(skip(self, secret))]
    pub fn start_with_secret(self, secret: Secret) -> RoundInProgress {
        debug!(%secret, "Round started");
        RoundInProgress {
            round: Round::new(secret),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - accepts validated guesses.
///
/// Invariants enforced by type:
/// - fewer than [`MAX_ATTEMPTS`] attempts used
/// - no three-strike attempt recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    pub(crate) round: Round,
}

impl RoundInProgress {
    /// Submits a guess, consuming the round and returning the next phase.
    ///
    /// Infallible: the guess is already validated, so every call counts as
    /// exactly one attempt. Contracts are checked in debug builds.
    #[instrument(skip(self), fields(attempt = self.round.attempts_used() + 1))]
    pub fn submit(self, guess: Guess) -> RoundResult {
        #[cfg(debug_assertions)]
        let before = self.round.clone();

        assert_contract(SubmitContract::pre(&self.round, &guess));

        let mut round = self.round;
        let score = score_guess(&guess, round.secret());
        round.record(Attempt::new(guess, score));

        #[cfg(debug_assertions)]
        assert_contract(SubmitContract::post(&before, &round));

        debug!(%score, attempts_used = round.attempts_used(), "Guess scored");

        if score.is_solved() {
            let attempts = round.attempts_used();
            info!(attempts, "Round won");
            return RoundResult::Finished(RoundFinished {
                round,
                outcome: Outcome::Won { attempts },
            });
        }

        if round.attempts_used() >= MAX_ATTEMPTS {
            info!(attempts = round.attempts_used(), "Round lost");
            let secret = *round.secret();
            return RoundResult::Finished(RoundFinished {
                round,
                outcome: Outcome::Lost { secret },
            });
        }

        RoundResult::InProgress {
            round: RoundInProgress { round },
            score,
        }
    }

    /// Returns the shared round data.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the number of accepted guesses.
    pub fn attempts_used(&self) -> u32 {
        self.round.attempts_used()
    }

    /// Returns how many guesses remain.
    pub fn remaining(&self) -> u32 {
        self.round.remaining()
    }

    /// Returns the attempt record in submission order.
    pub fn history(&self) -> &[Attempt] {
        self.round.history()
    }

    /// Replays guesses against a known secret from a fresh round.
    ///
    /// Guesses after the round finishes are ignored.
    #[instrument(skip(secret, guesses), fields(count = guesses.len()))]
    pub fn replay(secret: Secret, guesses: &[Guess]) -> RoundResult {
        let mut game = RoundSetup::new().start_with_secret(secret);
        let mut last_score = Score::default();

        for guess in guesses {
            match game.submit(*guess) {
                RoundResult::InProgress { round, score } => {
                    game = round;
                    last_score = score;
                }
                finished @ RoundResult::Finished(_) => return finished,
            }
        }

        RoundResult::InProgress {
            round: game,
            score: last_score,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
///
/// The outcome is always present, and the record is frozen.
///
/// ```
/// use strictly_baseball::{Guess, RoundInProgress, RoundResult, Secret};
///
/// let secret: Secret = "123".parse().unwrap();
/// let guess: Guess = "123".parse().unwrap();
/// let RoundResult::Finished(finished) = RoundInProgress::replay(secret, &[guess]) else {
///     panic!("exact guess wins");
/// };
/// assert_eq!(finished.history().len(), 1);
/// ```
///
/// A finished round has no `submit`:
///
/// ```compile_fail
/// use strictly_baseball::{Guess, RoundInProgress, RoundResult, Secret};
///
/// let secret: Secret = "123".parse().unwrap();
/// let guess: Guess = "123".parse().unwrap();
/// let RoundResult::Finished(finished) = RoundInProgress::replay(secret, &[guess]) else {
///     panic!("exact guess wins");
/// };
/// let _ = finished.submit(guess);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFinished {
    round: Round,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the shared round data.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the secret. Safe to show: the round is over.
    pub fn secret(&self) -> &Secret {
        self.round.secret()
    }

    /// Returns the attempt record in submission order.
    pub fn history(&self) -> &[Attempt] {
        self.round.history()
    }

    /// Restarts (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Round continues.
    InProgress {
        /// The updated round.
        round: RoundInProgress,
        /// Score of the guess just submitted.
        score: Score,
    },
    /// Round finished.
    Finished(RoundFinished),
}
