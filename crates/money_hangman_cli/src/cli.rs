//! Command-line interface for money_hangman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Money Hangman - guess the budgeting words before the figure is complete
#[derive(Parser, Debug)]
#[command(name = "money_hangman")]
#[command(about = "Budgeting hangman mini-game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session in the terminal
    Play {
        /// Path to a TOML config with XP values and puzzles
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit one JSON view per line instead of text screens
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a config file and print what it contains
    Check {
        /// Path to a TOML config with XP values and puzzles
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
