//! Line parsing and optional keystroke sanitation.

use strictly_baseball::DIGIT_COUNT;
use tracing::{instrument, trace};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Submit the text as a guess.
    Guess(&'a str),
    /// Start a new round.
    NewGame,
    /// Show the attempt record.
    History,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Parses one line of player input.
///
/// Surrounding whitespace is stripped; anything that is not a command
/// keyword is handed to the engine untouched.
#[instrument(level = "trace")]
pub fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "new" | "n" => Command::NewGame,
        "history" | "h" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Guess(trimmed),
    }
}

/// Filters raw keystrokes before they reach the engine.
///
/// Keeps only digits, drops a leading '0', drops repeated digits and
/// stops after three. The result may still be too short to be valid.
#[instrument(level = "debug")]
pub fn sanitize_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.strip_prefix('0').unwrap_or(&digits);

    let mut unique = String::with_capacity(DIGIT_COUNT);
    for c in digits.chars() {
        if unique.len() == DIGIT_COUNT {
            break;
        }
        if !unique.contains(c) {
            unique.push(c);
        }
    }

    trace!(%unique, "Sanitized input");
    unique
}
