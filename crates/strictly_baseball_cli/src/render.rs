//! Presentation of engine events as prose or JSON lines.
//!
//! Wording lives here and only here; the engine reports categories.

use serde::Serialize;
use strictly_baseball::{Attempt, GameState, Guess, Score, Secret, SubmitError, SubmitOutcome};
use tracing::warn;

/// Win/loss tally for one terminal session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Rounds started.
    pub rounds: u32,
    /// Rounds won.
    pub won: u32,
    /// Rounds lost.
    pub lost: u32,
}

impl SessionSummary {
    /// Records a terminal outcome.
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Won { .. } => self.won += 1,
            SubmitOutcome::Lost { .. } => self.lost += 1,
            SubmitOutcome::Continue(_) => {}
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    RoundStarted {
        max_attempts: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        secret: Option<Secret>,
    },
    Scored {
        guess: &'a str,
        result: &'a SubmitOutcome,
        attempts_used: u32,
        remaining: u32,
    },
    Rejected {
        kind: &'static str,
        message: String,
    },
    History {
        attempts: Vec<&'a Attempt>,
    },
    Summary(&'a SessionSummary),
    Score {
        secret: Secret,
        guess: Guess,
        score: Score,
    },
    Valid {
        guess: Guess,
    },
    Help {
        commands: &'static [&'static str],
    },
}

/// Prompt keywords understood by the play loop.
const COMMANDS: &[&str] = &["<3 digits>", "new", "history", "help", "quit"];

fn to_json(event: &Event<'_>) -> String {
    serde_json::to_string(event).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize event");
        format!(r#"{{"event":"error","message":"{}"}}"#, e)
    })
}

/// Formats engine events for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderer {
    json: bool,
}

impl Renderer {
    /// Creates a renderer; `json` switches to one JSON object per line.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// True when emitting JSON lines.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Announces a new round.
    pub fn round_started(&self, state: &GameState, reveal_secret: bool) -> String {
        let secret = reveal_secret.then_some(*state.secret());
        if self.json {
            return to_json(&Event::RoundStarted {
                max_attempts: *state.max_attempts(),
                secret,
            });
        }

        let mut text = format!(
            "New round! Guess the 3-digit number (distinct digits, no leading 0). You have {} attempts.",
            state.max_attempts()
        );
        if let Some(secret) = secret {
            text.push_str(&format!("\n[debug] The answer is {}", secret));
        }
        text
    }

    /// Reports an accepted guess.
    pub fn outcome(
        &self,
        guess: &str,
        outcome: &SubmitOutcome,
        attempts_used: u32,
        remaining: u32,
    ) -> String {
        if self.json {
            return to_json(&Event::Scored {
                guess,
                result: outcome,
                attempts_used,
                remaining,
            });
        }

        match outcome {
            SubmitOutcome::Continue(score) => format!(
                "{}  {}   (attempt {}, {} left)",
                guess, score, attempts_used, remaining
            ),
            SubmitOutcome::Won { attempts } => format!(
                "{}  3S\nCongratulations! You found it in {} attempt{}.\nType `new` to play again or `quit` to leave.",
                guess,
                attempts,
                if *attempts == 1 { "" } else { "s" }
            ),
            SubmitOutcome::Lost { secret } => format!(
                "{}  {}\nGame over. The answer was {}.\nType `new` to play again or `quit` to leave.",
                guess,
                outcome_score(guess, secret),
                secret
            ),
        }
    }

    /// Reports a rejected submission.
    pub fn error(&self, error: &SubmitError) -> String {
        let message = match error {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::NotActive => {
                "The round is over. Type `new` to play again.".to_string()
            }
        };
        if self.json {
            to_json(&Event::Rejected {
                kind: error.kind(),
                message,
            })
        } else {
            message
        }
    }

    /// Lists attempts most recent first.
    pub fn history<'a>(&self, attempts: impl Iterator<Item = &'a Attempt>) -> String {
        let attempts: Vec<&Attempt> = attempts.collect();
        if self.json {
            return to_json(&Event::History { attempts });
        }
        if attempts.is_empty() {
            return "No guesses yet.".to_string();
        }
        attempts
            .iter()
            .map(|a| format!("{}  {}", a.guess, a.score))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Shows the commands understood at the prompt.
    pub fn help(&self) -> String {
        if self.json {
            return to_json(&Event::Help { commands: COMMANDS });
        }
        "Commands: <3 digits> guess, `new` new round, `history` past guesses, `quit` leave."
            .to_string()
    }

    /// Session totals printed on exit.
    pub fn summary(&self, summary: &SessionSummary) -> String {
        if self.json {
            return to_json(&Event::Summary(summary));
        }
        format!(
            "Played {} round{}: {} won, {} lost.",
            summary.rounds,
            if summary.rounds == 1 { "" } else { "s" },
            summary.won,
            summary.lost
        )
    }

    /// One-shot score of a guess against a given secret.
    pub fn score(&self, secret: Secret, guess: Guess, score: Score) -> String {
        if self.json {
            to_json(&Event::Score {
                secret,
                guess,
                score,
            })
        } else {
            score.to_string()
        }
    }

    /// Confirms that input is a legal guess.
    pub fn valid(&self, guess: Guess) -> String {
        if self.json {
            to_json(&Event::Valid { guess })
        } else {
            format!("{} is a valid guess", guess)
        }
    }
}

/// Score of the final losing guess, recomputed for display.
fn outcome_score(guess: &str, secret: &Secret) -> String {
    match guess.parse::<Guess>() {
        Ok(guess) => strictly_baseball::score_guess(&guess, secret).to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_baseball::{GameEngine, ValidationError};

    #[test]
    fn test_continue_text() {
        let text = Renderer::new(false).outcome(
            "132",
            &SubmitOutcome::Continue(Score::new(1, 2)),
            1,
            9,
        );
        assert!(text.starts_with("132  1S 2B"));
        assert!(text.contains("9 left"));
    }

    #[test]
    fn test_lost_text_reveals_secret() {
        let secret: Secret = "123".parse().unwrap();
        let text = Renderer::new(false).outcome("132", &SubmitOutcome::Lost { secret }, 10, 0);
        assert!(text.contains("132  1S 2B"));
        assert!(text.contains("The answer was 123"));
    }

    #[test]
    fn test_won_json() {
        let line = Renderer::new(true).outcome("123", &SubmitOutcome::Won { attempts: 3 }, 3, 7);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "scored");
        assert_eq!(value["result"]["outcome"], "won");
        assert_eq!(value["result"]["attempts"], 3);
    }

    #[test]
    fn test_error_json_kind() {
        let err = SubmitError::Invalid(ValidationError::NonDigit {
            input: "1a2".to_string(),
        });
        let line = Renderer::new(true).error(&err);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "rejected");
        assert_eq!(value["kind"], "non_digit");
    }

    #[test]
    fn test_round_started_hides_secret_by_default() {
        let mut engine = GameEngine::with_seed(1);
        let state = engine.start_new_game();
        let line = Renderer::new(true).round_started(&state, false);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("secret").is_none());

        let text = Renderer::new(false).round_started(&state, true);
        assert!(text.contains(&state.secret().to_string()));
    }

    #[test]
    fn test_help_json_lists_commands() {
        let line = Renderer::new(true).help();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "help");
        assert_eq!(value["commands"][1], "new");
        assert_eq!(value["commands"].as_array().map(Vec::len), Some(COMMANDS.len()));
    }

    #[test]
    fn test_empty_history() {
        let text = Renderer::new(false).history(std::iter::empty());
        assert_eq!(text, "No guesses yet.");
    }

    #[test]
    fn test_summary_record() {
        let mut summary = SessionSummary {
            rounds: 2,
            ..Default::default()
        };
        summary.record(&SubmitOutcome::Won { attempts: 2 });
        summary.record(&SubmitOutcome::Continue(Score::new(0, 0)));
        assert_eq!(summary.won, 1);
        assert_eq!(summary.lost, 0);
        assert_eq!(
            Renderer::new(false).summary(&summary),
            "Played 2 rounds: 1 won, 0 lost."
        );
    }
}
