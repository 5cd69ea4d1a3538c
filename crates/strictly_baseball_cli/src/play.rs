//! Interactive play loop.
//!
//! Reads one line at a time and drives a [`GameEngine`]. Generic over the
//! reader and writer so it runs the same against a terminal or a test
//! buffer.

use crate::config::PlayConfig;
use crate::input::{Command, parse_line, sanitize_input};
use crate::render::{Renderer, SessionSummary};
use std::io::{self, BufRead, Write};
use strictly_baseball::GameEngine;
use tracing::{debug, info, instrument};

/// Session switches taken from [`PlayConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayOptions {
    /// Print the secret at the start of each round.
    pub reveal_secret: bool,
    /// Emit JSON lines.
    pub json: bool,
    /// Run input through [`sanitize_input`](crate::input::sanitize_input) first.
    pub sanitize_input: bool,
}

impl From<&PlayConfig> for PlayOptions {
    fn from(config: &PlayConfig) -> Self {
        Self {
            reveal_secret: *config.reveal_secret(),
            json: *config.json(),
            sanitize_input: *config.sanitize_input(),
        }
    }
}

/// Runs rounds until `quit` or end of input, then prints the summary.
#[instrument(skip_all, fields(seed = engine.seed()))]
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    options: PlayOptions,
    input: R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let renderer = Renderer::new(options.json);
    let mut summary = SessionSummary::default();

    start_round(engine, &renderer, options, &mut summary, output)?;
    if !renderer.is_json() {
        writeln!(output, "{}", renderer.help())?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Command::Quit => {
                debug!("Player quit");
                break;
            }
            Command::NewGame => start_round(engine, &renderer, options, &mut summary, output)?,
            Command::History => {
                writeln!(output, "{}", renderer.history(engine.history_latest_first()))?
            }
            Command::Help => writeln!(output, "{}", renderer.help())?,
            Command::Guess(raw) => {
                let text = if options.sanitize_input {
                    sanitize_input(raw)
                } else {
                    raw.to_string()
                };
                let message = match engine.submit_guess(&text) {
                    Ok(outcome) => {
                        if outcome.is_terminal() {
                            summary.record(&outcome);
                        }
                        let (used, remaining) = (engine.attempts_used(), engine.remaining());
                        renderer.outcome(&text, &outcome, used, remaining)
                    }
                    Err(err) => renderer.error(&err),
                };
                writeln!(output, "{}", message)?;
            }
        }
    }

    info!(
        rounds = summary.rounds,
        won = summary.won,
        lost = summary.lost,
        "Session finished"
    );
    writeln!(output, "{}", renderer.summary(&summary))?;
    Ok(summary)
}

fn start_round<W: Write>(
    engine: &mut GameEngine,
    renderer: &Renderer,
    options: PlayOptions,
    summary: &mut SessionSummary,
    output: &mut W,
) -> io::Result<()> {
    let state = engine.start_new_game();
    summary.rounds += 1;
    writeln!(output, "{}", renderer.round_started(&state, options.reveal_secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(
        engine: &mut GameEngine,
        options: PlayOptions,
        script: &str,
    ) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let input = Cursor::new(script.to_string());
        let summary = run_play(engine, options, input, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    /// Secret the seeded engine will draw for its first round.
    fn first_secret(seed: u64) -> String {
        let mut probe = GameEngine::with_seed(seed);
        probe.start_new_game().secret().to_string()
    }

    #[test]
    fn test_win_then_quit() {
        let secret = first_secret(42);
        let mut engine = GameEngine::with_seed(42);
        let script = format!("{secret}\nquit\n");
        let (summary, out) = play(&mut engine, PlayOptions::default(), &script);

        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.won, 1);
        assert!(out.contains("Congratulations! You found it in 1 attempt."));
        assert!(out.contains("Played 1 round: 1 won, 0 lost."));
    }

    #[test]
    fn test_invalid_input_reported_without_counting() {
        let mut engine = GameEngine::with_seed(1);
        let (_, out) = play(&mut engine, PlayOptions::default(), "012\n1a2\n");

        assert!(out.contains("cannot start with 0"));
        assert!(out.contains("Only digits are allowed"));
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn test_guess_after_finish_is_not_active() {
        let secret = first_secret(8);
        let mut engine = GameEngine::with_seed(8);
        let script = format!("{secret}\n{secret}\n");
        let (_, out) = play(&mut engine, PlayOptions::default(), &script);

        assert!(out.contains("The round is over"));
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn test_new_round_counts_in_summary() {
        let mut engine = GameEngine::with_seed(3);
        let (summary, _) = play(&mut engine, PlayOptions::default(), "new\nnew\n");
        assert_eq!(summary.rounds, 3);
        assert_eq!(engine.rounds_started(), 3);
    }

    #[test]
    fn test_sanitized_input_reaches_engine() {
        let secret = first_secret(21);
        let noisy: String = secret.chars().flat_map(|c| [c, c, '-']).collect();
        let options = PlayOptions {
            sanitize_input: true,
            ..Default::default()
        };
        let mut engine = GameEngine::with_seed(21);
        let (summary, _) = play(&mut engine, options, &format!("{noisy}\n"));
        assert_eq!(summary.won, 1);
    }

    #[test]
    fn test_json_lines_parse() {
        let mut engine = GameEngine::with_seed(5);
        let options = PlayOptions {
            json: true,
            ..Default::default()
        };
        let (_, out) = play(&mut engine, options, "122\nhistory\nhelp\n");

        let events: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events[0]["event"], "round_started");
        assert_eq!(events[1]["event"], "rejected");
        assert_eq!(events[1]["kind"], "duplicate_digit");
        assert_eq!(events[2]["event"], "history");
        assert_eq!(events[3]["event"], "help");
        assert_eq!(events[4]["event"], "summary");
    }

    #[test]
    fn test_history_latest_first() {
        let mut engine = GameEngine::with_seed(13);
        let secret = first_secret(13);
        // Two guesses built from digits not in the secret are never a win
        let unused: Vec<char> = ('1'..='9').filter(|c| !secret.contains(*c)).collect();
        let first: String = unused[0..3].iter().collect();
        let second: String = unused[3..6].iter().collect();

        let (_, out) = play(
            &mut engine,
            PlayOptions::default(),
            &format!("{first}\n{second}\nhistory\n"),
        );
        // The history listing holds the last occurrence of each line
        let pos_second = out.rfind(&format!("{second}  OUT")).unwrap();
        let pos_first = out.rfind(&format!("{first}  OUT")).unwrap();
        assert!(pos_second < pos_first);
    }
}
