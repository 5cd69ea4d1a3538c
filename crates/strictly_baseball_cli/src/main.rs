//! Number Baseball - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use strictly_baseball::{GameEngine, Guess, Secret, score_guess};
use strictly_baseball_cli::cli::{Cli, Command};
use strictly_baseball_cli::{PlayConfig, PlayOptions, Renderer, SEED_ENV, run_play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            seed,
            config,
            json,
            reveal,
            sanitize,
        } => run_play_command(config, seed, json, reveal, sanitize),
        Command::Score {
            secret,
            guess,
            json,
        } => {
            init_tracing("warn");
            run_score(&secret, &guess, json)
        }
        Command::Check { input, json } => {
            init_tracing("warn");
            run_check(&input, json)
        }
    }
}

/// Logs go to stderr so stdout stays clean for the game and JSON lines.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive session
fn run_play_command(
    config_path: PathBuf,
    seed: Option<u64>,
    json: bool,
    reveal: bool,
    sanitize: bool,
) -> Result<()> {
    let env_seed = std::env::var(SEED_ENV).ok();
    let config = PlayConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_env_seed(env_seed.as_deref())
        .context("Invalid environment")?
        .with_flags(seed, reveal, json, sanitize);

    init_tracing(config.log_filter());
    info!(seed = ?config.seed(), "Starting baseball session");

    let mut engine = match config.seed() {
        Some(seed) => GameEngine::with_seed(*seed),
        None => GameEngine::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut engine, PlayOptions::from(&config), stdin.lock(), &mut stdout)
        .context("Terminal I/O failed")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Score one guess against a given secret
#[instrument]
fn run_score(secret: &str, guess: &str, json: bool) -> Result<()> {
    let secret = Secret::parse(secret).context("Invalid secret")?;
    let guess = Guess::parse(guess).context("Invalid guess")?;
    let score = score_guess(&guess, &secret);
    println!("{}", Renderer::new(json).score(secret, guess, score));
    Ok(())
}

/// Report whether input is a legal guess
#[instrument]
fn run_check(input: &str, json: bool) -> Result<()> {
    let renderer = Renderer::new(json);
    match GameEngine::validate_guess(input) {
        Ok(guess) => {
            println!("{}", renderer.valid(guess));
            Ok(())
        }
        Err(err) => {
            println!("{}", renderer.error(&err.into()));
            anyhow::bail!("{} is not a legal guess", input)
        }
    }
}
