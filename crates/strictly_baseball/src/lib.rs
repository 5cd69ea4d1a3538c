//! Strictly Baseball - pure number baseball game logic.
//!
//! A hidden three-digit secret (distinct digits, no leading zero) must be
//! deduced within [`MAX_ATTEMPTS`] guesses. Each accepted guess is scored as
//! strikes (right digit, right place) and balls (right digit, wrong place).
//!
//! # Architecture
//!
//! - **Types**: [`Secret`], [`Guess`], [`Score`] and the attempt record
//! - **Rules**: pure secret generation and scoring functions
//! - **Typestate**: [`RoundSetup`] → [`RoundInProgress`] → [`RoundFinished`]
//! - **Contracts / invariants**: debug-build checks on every transition
//! - **Engine**: [`GameEngine`], a runtime wrapper for front ends that hold
//!   one mutable game value
//!
//! # Example
//!
//! ```
//! use strictly_baseball::{GameEngine, Secret, SubmitOutcome};
//!
//! let secret: Secret = "123".parse().unwrap();
//! let mut engine = GameEngine::with_seed(7);
//! engine.start_with_secret(secret);
//!
//! let outcome = engine.submit_guess("132").unwrap();
//! assert_eq!(outcome.to_string(), "1S 2B");
//!
//! let outcome = engine.submit_guess("123").unwrap();
//! assert_eq!(outcome, SubmitOutcome::Won { attempts: 2 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod rng;
mod rules;
mod types;
mod typestate;

pub use action::{Attempt, SubmitError, SubmitOutcome, ValidationError};
pub use contracts::{
    AllDigits, AttemptsRemain, Contract, ContractViolation, DistinctDigits, ExactLength,
    LegalGuess, NoLeadingZero, SubmitContract,
};
pub use engine::{GameEngine, GameState, GameStatus};
pub use invariants::{
    AttemptBoundInvariant, BaseballInvariants, Invariant, InvariantSet, InvariantViolation,
    ScoreConsistentInvariant, SolvedLastInvariant,
};
pub use phases::Outcome;
pub use rng::GameRng;
pub use rules::{generate_secret, score_guess};
pub use types::{DIGIT_COUNT, Guess, MAX_ATTEMPTS, Round, Score, ScoreError, Secret};
pub use typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
