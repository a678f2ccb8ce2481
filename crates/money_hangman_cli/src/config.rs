//! Game configuration loaded from TOML.
//!
//! ```toml
//! [xp]
//! hit = 10
//! miss = -5
//! won = 50
//! lost = -20
//!
//! [[puzzles]]
//! answer = "budget"
//! hint = "A plan for your money"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use money_hangman::{Puzzle, WordBank, XpPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

fn default_hit() -> i64 {
    10
}

fn default_miss() -> i64 {
    -5
}

fn default_won() -> i64 {
    50
}

fn default_lost() -> i64 {
    -20
}

/// The `[xp]` table. Keys left out fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct XpTable {
    #[serde(default = "default_hit")]
    hit: i64,
    #[serde(default = "default_miss")]
    miss: i64,
    #[serde(default = "default_won")]
    won: i64,
    #[serde(default = "default_lost")]
    lost: i64,
}

impl Default for XpTable {
    fn default() -> Self {
        Self {
            hit: default_hit(),
            miss: default_miss(),
            won: default_won(),
            lost: default_lost(),
        }
    }
}

impl XpTable {
    fn from_policy(policy: &XpPolicy) -> Self {
        Self {
            hit: *policy.hit(),
            miss: *policy.miss(),
            won: *policy.won(),
            lost: *policy.lost(),
        }
    }

    fn into_policy(self) -> XpPolicy {
        XpPolicy::new(self.hit, self.miss, self.won, self.lost)
    }
}

fn default_xp() -> XpPolicy {
    XpTable::default().into_policy()
}

/// XP deltas and word bank for a play-through.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// XP awarded per guess result.
    #[serde(default = "default_xp", with = "xp_table")]
    xp: XpPolicy,

    /// Puzzles in play order. Empty means the built-in budgeting bank.
    #[serde(default)]
    puzzles: Vec<Puzzle>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            xp: default_xp(),
            puzzles: Vec::new(),
        }
    }
}

/// Reads and writes [`XpPolicy`] through [`XpTable`].
mod xp_table {
    use super::XpTable;
    use money_hangman::XpPolicy;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(policy: &XpPolicy, serializer: S) -> Result<S::Ok, S::Error> {
        XpTable::from_policy(policy).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<XpPolicy, D::Error> {
        XpTable::deserialize(deserializer).map(XpTable::into_policy)
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(puzzles = config.puzzles.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The configured puzzles, or the built-in bank if none are listed.
    pub fn word_bank(&self) -> WordBank {
        if self.puzzles.is_empty() {
            WordBank::budgeting()
        } else {
            WordBank::new(self.puzzles.iter().cloned())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
