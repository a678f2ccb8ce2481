//! Where puzzles come from.
//!
//! A session pulls puzzles one at a time, in order, until the source runs
//! dry. The supply itself is owned by the caller.

use crate::{Puzzle, PuzzleError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Ordered, finite supply of puzzles.
pub trait PuzzleSource {
    /// Takes the next puzzle, or `None` once exhausted.
    fn next_puzzle(&mut self) -> Option<Puzzle>;

    /// Puzzles left, if known.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

/// A fixed list of puzzles played front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    puzzles: VecDeque<Puzzle>,
}

impl WordBank {
    /// Wraps an ordered list of puzzles.
    pub fn new(puzzles: impl IntoIterator<Item = Puzzle>) -> Self {
        Self {
            puzzles: puzzles.into_iter().collect(),
        }
    }

    /// Builds a bank from `(answer, hint)` pairs.
    #[instrument(skip(entries))]
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> Result<Self, PuzzleError> {
        let puzzles = entries
            .into_iter()
            .map(|(answer, hint)| Puzzle::new(answer, hint.map(str::to_string)))
            .collect::<Result<VecDeque<_>, _>>()?;
        debug!(count = puzzles.len(), "Word bank built");
        Ok(Self { puzzles })
    }

    /// Budgeting vocabulary used when no word bank is configured.
    pub fn budgeting() -> Self {
        const ENTRIES: &[(&str, &str)] = &[
            ("BUDGET", "A plan for how you will spend and save your money"),
            ("INCOME", "Money you receive, like a paycheck or allowance"),
            ("EXPENSES", "Money you spend on things you need or want"),
            ("SAVINGS", "Money you set aside for later"),
            ("NEEDS", "Things you must have, like food and housing"),
            ("WANTS", "Things that are nice to have but not essential"),
            ("EMERGENCY FUND", "Savings kept for unexpected costs"),
            ("INTEREST", "What a bank pays you to keep money with it"),
        ];

        Self {
            puzzles: ENTRIES
                .iter()
                .filter_map(|(answer, hint)| Puzzle::new(answer, Some(hint.to_string())).ok())
                .collect(),
        }
    }

    /// Number of puzzles left.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns true when no puzzles are left.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Puzzles left, in play order.
    pub fn puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }
}

impl PuzzleSource for WordBank {
    fn next_puzzle(&mut self) -> Option<Puzzle> {
        self.puzzles.pop_front()
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.puzzles.len())
    }
}

/// Adapts any iterator of puzzles into a [`PuzzleSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I> IterSource<I>
where
    I: Iterator<Item = Puzzle>,
{
    /// Wraps `iter`.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(iter.into_iter())
    }
}

impl<I> PuzzleSource for IterSource<I>
where
    I: Iterator<Item = Puzzle>,
{
    fn next_puzzle(&mut self) -> Option<Puzzle> {
        self.0.next()
    }
}
