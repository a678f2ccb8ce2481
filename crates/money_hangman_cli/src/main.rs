//! Money Hangman - terminal mini-game
//!
//! Plays the budgeting hangman session on stdin/stdout.

use anyhow::Result;
use clap::Parser;
use money_hangman::GameSession;
use money_hangman_cli::{Cli, Command, GameConfig, OutputMode};
use std::io;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            json,
            no_color,
        } => run_play(config.as_deref(), json, no_color),
        Command::Check { config } => run_check(config.as_deref()),
    }
}

/// Play a session on stdin/stdout
#[instrument]
fn run_play(config: Option<&Path>, json: bool, no_color: bool) -> Result<()> {
    let config = GameConfig::load(config)?;
    let bank = config.word_bank();
    info!(puzzles = bank.len(), "Starting play");

    let session = GameSession::new(bank, *config.xp())?;
    let mode = if json {
        OutputMode::Json
    } else {
        OutputMode::Text { color: !no_color }
    };

    let stdin = io::stdin();
    let summary = money_hangman_cli::run(session, stdin.lock(), io::stdout(), mode)?;
    info!(?summary, "Play finished");
    Ok(())
}

/// Validate a config and print a summary
#[instrument]
fn run_check(config: Option<&Path>) -> Result<()> {
    let config = GameConfig::load(config)?;
    let bank = config.word_bank();
    let xp = config.xp();

    println!(
        "XP: hit {} / miss {} / won {} / lost {}",
        xp.hit(),
        xp.miss(),
        xp.won(),
        xp.lost()
    );
    println!("Puzzles: {}", bank.len());
    for (i, puzzle) in bank.puzzles().enumerate() {
        let shape = format!(
            "{} characters, {} distinct letters",
            puzzle.answer().len(),
            puzzle.letters().len()
        );
        match puzzle.hint() {
            Some(hint) => println!("  {}. {} - {}", i + 1, shape, hint),
            None => println!("  {}. {}", i + 1, shape),
        }
    }
    Ok(())
}
