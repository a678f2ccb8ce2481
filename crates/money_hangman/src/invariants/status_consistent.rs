//! Status invariant: Won and Lost follow from the guesses.

use super::Invariant;
use crate::{MAX_INCORRECT_ATTEMPTS, PuzzleState, PuzzleStatus};

/// Invariant: status is Won iff the answer is fully guessed, and Lost iff
/// the miss limit was reached without winning.
pub struct StatusConsistentInvariant;

impl Invariant<PuzzleState> for StatusConsistentInvariant {
    fn holds(state: &PuzzleState) -> bool {
        let complete = state.is_complete();
        let exhausted = state.incorrect >= MAX_INCORRECT_ATTEMPTS;
        match state.status {
            PuzzleStatus::Won => complete,
            PuzzleStatus::Lost => exhausted && !complete,
            PuzzleStatus::InProgress => !complete && !exhausted,
        }
    }

    fn description() -> &'static str {
        "Status agrees with guessed letters and miss count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, Puzzle};

    fn play(answer: &str, guesses: &str) -> PuzzleState {
        let mut state = PuzzleState::new(Puzzle::new(answer, None).unwrap());
        for c in guesses.chars() {
            state.guess(Letter::new(c).unwrap());
        }
        state
    }

    #[test]
    fn test_won_and_lost_hold() {
        assert!(StatusConsistentInvariant::holds(&play("TAX", "TAX")));
        assert!(StatusConsistentInvariant::holds(&play("TAX", "QWERUI")));
    }

    #[test]
    fn test_premature_win_violates() {
        let mut state = play("TAX", "T");
        state.status = PuzzleStatus::Won;
        assert!(!StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missed_loss_violates() {
        let mut state = play("TAX", "QWERUI");
        state.status = PuzzleStatus::InProgress;
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
