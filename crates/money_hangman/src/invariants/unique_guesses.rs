//! Unique guesses invariant: a letter is recorded at most once.

use super::Invariant;
use crate::PuzzleState;
use std::collections::HashSet;

/// Invariant: no letter appears twice in the guess list.
pub struct UniqueGuessesInvariant;

impl Invariant<PuzzleState> for UniqueGuessesInvariant {
    fn holds(state: &PuzzleState) -> bool {
        let mut seen = HashSet::new();
        state.guessed.iter().all(|letter| seen.insert(*letter))
    }

    fn description() -> &'static str {
        "Each letter is guessed at most once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, Puzzle};

    #[test]
    fn test_repeat_guess_is_not_recorded() {
        let mut state = PuzzleState::new(Puzzle::new("SAVE", None).unwrap());
        let s = Letter::new('s').unwrap();
        state.guess(s);
        state.guess(s);
        assert!(UniqueGuessesInvariant::holds(&state));
        assert_eq!(state.guessed_letters().len(), 1);
    }

    #[test]
    fn test_corrupted_list_violates() {
        let mut state = PuzzleState::new(Puzzle::new("SAVE", None).unwrap());
        let s = Letter::new('S').unwrap();
        state.guessed.extend([s, s]);
        assert!(!UniqueGuessesInvariant::holds(&state));
    }
}
