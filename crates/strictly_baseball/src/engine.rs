//! Runtime game engine for front ends.
//!
//! [`GameEngine`] wraps the typestate phases in one owned value so a
//! front end can hold a single mutable game and drive it with raw text.
//! Every transition is delegated to the typestate API.

use super::action::{Attempt, SubmitError, SubmitOutcome, ValidationError};
use super::phases::Outcome;
use super::rng::GameRng;
use super::rules;
use super::types::{Guess, MAX_ATTEMPTS, Round, Score, Secret};
use super::typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Where the engine is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No round started yet.
    #[display("not started")]
    NotStarted,
    /// Guesses are being accepted.
    #[display("active")]
    Active,
    /// Last round was won.
    #[display("won")]
    Won,
    /// Last round was lost.
    #[display("lost")]
    Lost,
}

/// Snapshot of the current round.
///
/// Holds the secret: front ends should only show it once `active` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// The round's secret.
    secret: Secret,
    /// Accepted guesses so far.
    attempts_used: u32,
    /// Guess limit per round.
    max_attempts: u32,
    /// True until the round is won or lost.
    active: bool,
    /// Attempt record in submission order.
    history: Vec<Attempt>,
    /// Set once the round is over.
    outcome: Option<Outcome>,
}

impl GameState {
    fn from_round(round: &Round, outcome: Option<Outcome>) -> Self {
        Self {
            secret: *round.secret(),
            attempts_used: round.attempts_used(),
            max_attempts: MAX_ATTEMPTS,
            active: outcome.is_none(),
            history: round.history().to_vec(),
            outcome,
        }
    }

    /// Guesses left in the round.
    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    NotStarted,
    InProgress(RoundInProgress),
    Finished(RoundFinished),
}

/// Single-player number baseball engine.
///
/// Owns the RNG and the current round. One engine per player session;
/// the host is responsible for any sharing across threads.
#[derive(Debug, Clone)]
pub struct GameEngine {
    rng: GameRng,
    phase: Phase,
    rounds_started: u32,
}

impl GameEngine {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Creates an engine whose secrets are reproducible from `seed`.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Creates an engine around an existing RNG.
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            rng,
            phase: Phase::NotStarted,
            rounds_started: 0,
        }
    }

    /// Returns the seed of the engine's RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Starts a fresh round with a newly drawn secret.
    ///
    /// Replaces any round in progress or finished.
    #[instrument(skip(self), fields(seed = self.rng.seed()))]
    pub fn start_new_game(&mut self) -> GameState {
        let round = RoundSetup::new().start(&mut self.rng);
        self.begin(round)
    }

    /// Starts a fresh round around a known secret.
    #[instrument(skip(self, secret))]
    pub fn start_with_secret(&mut self, secret: Secret) -> GameState {
        let round = RoundSetup::new().start_with_secret(secret);
        self.begin(round)
    }

    fn begin(&mut self, round: RoundInProgress) -> GameState {
        if matches!(self.phase, Phase::InProgress(_)) {
            info!("Abandoning unfinished round");
        }
        self.rounds_started += 1;
        info!(round = self.rounds_started, "New round started");
        let state = GameState::from_round(round.round(), None);
        self.phase = Phase::InProgress(round);
        state
    }

    /// Validates raw input as a guess. Never touches engine state.
    #[instrument]
    pub fn validate_guess(input: &str) -> Result<Guess, ValidationError> {
        Guess::parse(input)
    }

    /// Scores a validated guess against a secret.
    pub fn score_guess(guess: &Guess, secret: &Secret) -> Score {
        rules::score_guess(guess, secret)
    }

    /// Submits raw input as the next guess.
    ///
    /// Rejected input and calls while no round is active leave the engine
    /// unchanged; only accepted guesses consume an attempt.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, input: &str) -> Result<SubmitOutcome, SubmitError> {
        let round = match std::mem::take(&mut self.phase) {
            Phase::InProgress(round) => round,
            other => {
                warn!(status = %status_of(&other), "Guess submitted while no round is active");
                self.phase = other;
                return Err(SubmitError::NotActive);
            }
        };

        let guess = match Guess::parse(input) {
            Ok(guess) => guess,
            Err(err) => {
                warn!(kind = err.kind(), "Guess rejected");
                self.phase = Phase::InProgress(round);
                return Err(err.into());
            }
        };

        let outcome = match round.submit(guess) {
            RoundResult::InProgress { round, score } => {
                self.phase = Phase::InProgress(round);
                SubmitOutcome::Continue(score)
            }
            RoundResult::Finished(finished) => {
                let outcome = SubmitOutcome::from(*finished.outcome());
                self.phase = Phase::Finished(finished);
                outcome
            }
        };

        Ok(outcome)
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> GameStatus {
        status_of(&self.phase)
    }

    /// True while guesses are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    /// Guess limit per round.
    pub fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    /// Accepted guesses in the current (or last) round.
    pub fn attempts_used(&self) -> u32 {
        self.round().map_or(0, Round::attempts_used)
    }

    /// Guesses left in the current round.
    pub fn remaining(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used())
    }

    /// Attempt record in submission order; empty before the first round.
    pub fn history(&self) -> &[Attempt] {
        self.round().map(Round::history).unwrap_or_default()
    }

    /// Attempt record most recent first.
    pub fn history_latest_first(&self) -> impl Iterator<Item = &Attempt> {
        self.history().iter().rev()
    }

    /// Outcome of the last round, once it has finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(finished) => Some(finished.outcome()),
            Phase::NotStarted | Phase::InProgress(_) => None,
        }
    }

    /// Snapshot of the current round, or `None` before the first round.
    pub fn state(&self) -> Option<GameState> {
        match &self.phase {
            Phase::NotStarted => None,
            Phase::InProgress(round) => Some(GameState::from_round(round.round(), None)),
            Phase::Finished(finished) => Some(GameState::from_round(
                finished.round(),
                Some(*finished.outcome()),
            )),
        }
    }

    /// Number of rounds started over the engine's lifetime.
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::NotStarted => None,
            Phase::InProgress(round) => Some(round.round()),
            Phase::Finished(finished) => Some(finished.round()),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn status_of(phase: &Phase) -> GameStatus {
    match phase {
        Phase::NotStarted => GameStatus::NotStarted,
        Phase::InProgress(_) => GameStatus::Active,
        Phase::Finished(finished) if finished.outcome().is_won() => GameStatus::Won,
        Phase::Finished(_) => GameStatus::Lost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(secret: &str) -> GameEngine {
        let mut engine = GameEngine::with_seed(0);
        engine.start_with_secret(Secret::parse(secret).unwrap());
        engine
    }

    #[test]
    fn test_not_started_rejects_guess() {
        let mut engine = GameEngine::with_seed(0);
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.submit_guess("123"), Err(SubmitError::NotActive));
        assert_eq!(engine.attempts_used(), 0);
        assert!(engine.state().is_none());
    }

    #[test]
    fn test_start_new_game_resets() {
        let mut engine = GameEngine::with_seed(0);
        let state = engine.start_new_game();
        assert_eq!(*state.attempts_used(), 0);
        assert_eq!(*state.max_attempts(), MAX_ATTEMPTS);
        assert!(*state.active());
        assert!(state.history().is_empty());
        assert_eq!(state.remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_invalid_guess_does_not_count() {
        let mut engine = engine_with("123");
        for _ in 0..5 {
            let err = engine.submit_guess("112").unwrap_err();
            assert_eq!(err.kind(), "duplicate_digit");
        }
        assert_eq!(engine.attempts_used(), 0);
        assert!(engine.history().is_empty());
        assert!(engine.is_active());
    }

    #[test]
    fn test_continue_then_win() {
        let mut engine = engine_with("123");
        assert_eq!(
            engine.submit_guess("132"),
            Ok(SubmitOutcome::Continue(Score::new(1, 2)))
        );
        assert_eq!(
            engine.submit_guess("123"),
            Ok(SubmitOutcome::Won { attempts: 2 })
        );
        assert_eq!(engine.status(), GameStatus::Won);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_finished_round_rejects_guess() {
        let mut engine = engine_with("123");
        engine.submit_guess("123").unwrap();
        assert_eq!(engine.submit_guess("456"), Err(SubmitError::NotActive));
        assert_eq!(engine.attempts_used(), 1);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_state_reveals_outcome_when_finished() {
        let mut engine = engine_with("123");
        engine.submit_guess("123").unwrap();
        let state = engine.state().unwrap();
        assert!(!*state.active());
        assert_eq!(state.outcome(), &Some(Outcome::Won { attempts: 1 }));
    }

    #[test]
    fn test_history_latest_first() {
        let mut engine = engine_with("123");
        engine.submit_guess("456").unwrap();
        engine.submit_guess("132").unwrap();
        let latest: Vec<String> = engine
            .history_latest_first()
            .map(|a| a.guess.to_string())
            .collect();
        assert_eq!(latest, vec!["132", "456"]);
    }

    #[test]
    fn test_validate_and_score_are_pure() {
        let guess = GameEngine::validate_guess("132").unwrap();
        let secret = Secret::parse("123").unwrap();
        assert_eq!(GameEngine::score_guess(&guess, &secret), Score::new(1, 2));
        assert!(GameEngine::validate_guess("012").is_err());
    }

    #[test]
    fn test_rounds_started_counts() {
        let mut engine = GameEngine::with_seed(3);
        engine.start_new_game();
        engine.start_new_game();
        assert_eq!(engine.rounds_started(), 2);
        assert_eq!(engine.seed(), 3);
    }
}
