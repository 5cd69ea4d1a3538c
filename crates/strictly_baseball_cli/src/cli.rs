//! Command-line interface for the baseball game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Number Baseball - guess the 3-digit number in ten tries
#[derive(Parser, Debug)]
#[command(name = "baseball")]
#[command(about = "Number baseball in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Fixed seed for reproducible secrets (overrides BASEBALL_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to play configuration
        #[arg(short, long, default_value = "baseball.toml")]
        config: PathBuf,

        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,

        /// Show the secret when each round starts
        #[arg(long)]
        reveal: bool,

        /// Keep only digits, drop a leading 0 and repeated digits
        #[arg(long)]
        sanitize: bool,
    },

    /// Score one guess against a known secret
    Score {
        /// The secret number
        secret: String,

        /// The guess to score
        guess: String,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether input is a legal guess
    Check {
        /// Text to validate
        input: String,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
