//! Experience points.
//!
//! [`XpPolicy`] turns guess results into signed deltas; [`ScoreTracker`]
//! applies them with a floor of zero.

use crate::GuessResult;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// XP delta per guess result.
///
/// Amounts are supplied by the caller. Duplicate and post-game guesses are
/// always worth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct XpPolicy {
    /// Delta for a correct letter.
    hit: i64,
    /// Delta for a wrong letter.
    miss: i64,
    /// Delta for the letter that completes the answer.
    won: i64,
    /// Delta for the letter that uses up the last attempt.
    lost: i64,
}

impl XpPolicy {
    /// Delta awarded for `result`.
    #[instrument(skip(self))]
    pub fn delta_for(&self, result: GuessResult) -> i64 {
        match result {
            GuessResult::Hit => self.hit,
            GuessResult::Miss => self.miss,
            GuessResult::Won => self.won,
            GuessResult::Lost => self.lost,
            GuessResult::DuplicateGuess | GuessResult::AlreadyTerminal => 0,
        }
    }
}

/// One applied score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScoreEvent {
    /// Result that triggered the change, if any.
    pub result: Option<GuessResult>,
    /// Delta asked for.
    pub requested: i64,
    /// Change actually applied after clamping at zero.
    pub applied: i64,
}

/// Non-negative XP counter for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    xp: u64,
    history: Vec<ScoreEvent>,
}

impl ScoreTracker {
    /// Starts at zero XP.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta`, flooring the total at zero. Returns the new total.
    #[instrument(skip(self), fields(xp = self.xp))]
    pub fn apply(&mut self, delta: i64) -> u64 {
        self.record(None, delta)
    }

    /// Applies the policy delta for `result` and records it.
    #[instrument(skip(self, policy), fields(xp = self.xp))]
    pub fn apply_result(&mut self, policy: &XpPolicy, result: GuessResult) -> u64 {
        self.record(Some(result), policy.delta_for(result))
    }

    fn record(&mut self, result: Option<GuessResult>, delta: i64) -> u64 {
        let before = self.xp;
        self.xp = if delta >= 0 {
            before.saturating_add(delta.unsigned_abs())
        } else {
            before.saturating_sub(delta.unsigned_abs())
        };

        let applied = i64::try_from(self.xp)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(before).unwrap_or(i64::MAX));

        if delta != 0 {
            self.history.push(ScoreEvent::new(result, delta, applied));
        }
        debug!(delta, applied, xp = self.xp, "XP updated");

        self.xp
    }

    /// Current total.
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Non-zero changes in the order they were applied.
    pub fn history(&self) -> &[ScoreEvent] {
        &self.history
    }
}
