//! Incorrect count invariant: the miss counter matches the guesses.

use super::Invariant;
use crate::{MAX_INCORRECT_ATTEMPTS, PuzzleState};

/// Invariant: `incorrect` equals the number of guessed letters absent from
/// the answer and never exceeds the limit.
pub struct IncorrectCountInvariant;

impl Invariant<PuzzleState> for IncorrectCountInvariant {
    fn holds(state: &PuzzleState) -> bool {
        let misses = state
            .guessed
            .iter()
            .filter(|letter| !state.puzzle.contains(**letter))
            .count();
        misses == usize::from(state.incorrect) && state.incorrect <= MAX_INCORRECT_ATTEMPTS
    }

    fn description() -> &'static str {
        "Incorrect count matches missed guesses and stays within the limit"
    }
}
