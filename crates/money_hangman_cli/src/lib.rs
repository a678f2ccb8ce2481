//! Terminal front end for the Money Hangman mini-game.
//!
//! Loads [`GameConfig`] from TOML, plays a [`money_hangman::GameSession`]
//! over line-based input with [`play::run`], and renders views as text or
//! JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod play;
pub mod render;

// Crate-level exports
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use play::{OutputMode, run};
