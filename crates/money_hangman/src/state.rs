//! Guessing state machine for a single puzzle.

use crate::invariants::assert_invariants;
use crate::{AnswerChar, Letter, MAX_INCORRECT_ATTEMPTS, Puzzle};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum PuzzleStatus {
    /// Guesses are still accepted.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Every letter of the answer was guessed.
    #[display("Won")]
    Won,
    /// The miss limit was reached.
    #[display("Lost")]
    Lost,
}

impl PuzzleStatus {
    /// Won and Lost accept no further guesses.
    pub fn is_terminal(self) -> bool {
        !matches!(self, PuzzleStatus::InProgress)
    }
}

/// Outcome of a single guess.
///
/// Callers match on every variant; none of them is an error, the state
/// machine stays usable after each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GuessResult {
    /// Letter is in the answer; more remain hidden.
    #[display("Hit")]
    Hit,
    /// Letter is not in the answer; attempts remain.
    #[display("Miss")]
    Miss,
    /// Letter completed the answer.
    #[display("Won")]
    Won,
    /// Letter used up the last attempt.
    #[display("Lost")]
    Lost,
    /// Letter was tried before; nothing changed.
    #[display("Already tried")]
    DuplicateGuess,
    /// Round is over; nothing changed.
    #[display("Round is over")]
    AlreadyTerminal,
}

impl GuessResult {
    /// Returns true if the guess changed the state.
    pub fn is_accepted(self) -> bool {
        !matches!(self, GuessResult::DuplicateGuess | GuessResult::AlreadyTerminal)
    }
}

/// One position of the masked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskedCell {
    /// Guessed letter or fixed character.
    Revealed(char),
    /// Letter not yet guessed.
    Blank,
}

impl MaskedCell {
    /// Placeholder used when rendering blanks as text.
    pub const BLANK: char = '_';

    /// Character to draw for this cell.
    pub fn as_char(self) -> char {
        match self {
            MaskedCell::Revealed(c) => c,
            MaskedCell::Blank => Self::BLANK,
        }
    }
}

/// Mutable state of one round.
///
/// Invariants:
/// - a letter appears in `guessed` at most once
/// - `incorrect` equals the number of guessed letters missing from the answer
/// - status is Won iff every answer letter was guessed
/// - status is Lost iff `incorrect` reached the limit and the round was not won
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pub(crate) puzzle: Puzzle,
    pub(crate) guessed: Vec<Letter>,
    pub(crate) incorrect: u8,
    pub(crate) status: PuzzleStatus,
}

impl PuzzleState {
    /// Starts a fresh round.
    #[instrument(skip(puzzle))]
    pub fn new(puzzle: Puzzle) -> Self {
        debug!(letters = puzzle.letters().len(), "Starting puzzle");
        Self {
            puzzle,
            guessed: Vec::new(),
            incorrect: 0,
            status: PuzzleStatus::InProgress,
        }
    }

    /// Applies a guess.
    ///
    /// After the round ends, or for a letter already tried, the state is
    /// left untouched and the result says why.
    #[instrument(skip(self, letter), fields(letter = %letter, status = %self.status))]
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        if self.status.is_terminal() {
            warn!("Guess after round ended");
            return GuessResult::AlreadyTerminal;
        }

        if self.guessed.contains(&letter) {
            debug!("Duplicate guess ignored");
            return GuessResult::DuplicateGuess;
        }

        self.guessed.push(letter);

        let result = if self.puzzle.contains(letter) {
            if self.is_complete() {
                self.status = PuzzleStatus::Won;
                GuessResult::Won
            } else {
                GuessResult::Hit
            }
        } else {
            self.incorrect += 1;
            if self.incorrect >= MAX_INCORRECT_ATTEMPTS {
                self.status = PuzzleStatus::Lost;
                GuessResult::Lost
            } else {
                GuessResult::Miss
            }
        };

        info!(
            %result,
            incorrect = self.incorrect,
            remaining = self.remaining_attempts(),
            "Guess applied"
        );

        assert_invariants(self);

        result
    }

    /// Answer with unguessed letters blanked out.
    #[instrument(skip(self))]
    pub fn masked_answer(&self) -> Vec<MaskedCell> {
        self.puzzle
            .answer()
            .iter()
            .map(|c| match c {
                AnswerChar::Letter(letter) if self.guessed.contains(letter) => {
                    MaskedCell::Revealed(letter.as_char())
                }
                AnswerChar::Letter(_) => MaskedCell::Blank,
                AnswerChar::Fixed(c) => MaskedCell::Revealed(*c),
            })
            .collect()
    }

    /// Masked answer as text, blanks drawn as `_`.
    pub fn masked_string(&self) -> String {
        self.masked_answer().into_iter().map(MaskedCell::as_char).collect()
    }

    /// Misses left before the round is lost.
    pub fn remaining_attempts(&self) -> u8 {
        MAX_INCORRECT_ATTEMPTS.saturating_sub(self.incorrect)
    }

    /// Number of misses so far.
    pub fn incorrect_count(&self) -> u8 {
        self.incorrect
    }

    /// Current status.
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    /// Returns true once Won or Lost.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Letters tried so far, in guess order.
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    /// Guessed letters that are not in the answer.
    pub fn incorrect_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|letter| !self.puzzle.contains(*letter))
            .collect()
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Hint text for the puzzle, if any.
    pub fn hint(&self) -> Option<&str> {
        self.puzzle.hint().as_deref()
    }

    /// Returns true if every answer letter has been guessed.
    pub(crate) fn is_complete(&self) -> bool {
        self.puzzle
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(answer: &str) -> PuzzleState {
        PuzzleState::new(Puzzle::new(answer, None).unwrap())
    }

    fn guess(state: &mut PuzzleState, c: char) -> GuessResult {
        state.guess(Letter::new(c).unwrap())
    }

    #[test]
    fn test_new_state_is_blank() {
        let state = state("SAVE");
        assert_eq!(state.masked_string(), "____");
        assert_eq!(state.status(), PuzzleStatus::InProgress);
        assert_eq!(state.remaining_attempts(), MAX_INCORRECT_ATTEMPTS);
    }

    #[test]
    fn test_hit_reveals_every_occurrence() {
        let mut state = state("SAVINGS");
        assert_eq!(guess(&mut state, 's'), GuessResult::Hit);
        assert_eq!(state.masked_string(), "S_____S");
        assert_eq!(state.incorrect_count(), 0);
    }

    #[test]
    fn test_miss_counts() {
        let mut state = state("SAVE");
        assert_eq!(guess(&mut state, 'Q'), GuessResult::Miss);
        assert_eq!(state.incorrect_count(), 1);
        assert_eq!(state.remaining_attempts(), 5);
        assert_eq!(state.incorrect_letters(), vec![Letter::new('Q').unwrap()]);
    }

    #[test]
    fn test_win_transition() {
        let mut state = state("TAX");
        assert_eq!(guess(&mut state, 't'), GuessResult::Hit);
        assert_eq!(guess(&mut state, 'a'), GuessResult::Hit);
        assert_eq!(guess(&mut state, 'x'), GuessResult::Won);
        assert_eq!(state.status(), PuzzleStatus::Won);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_loss_transition() {
        let mut state = state("SAVE");
        for c in ['Q', 'X', 'Z', 'J', 'K'] {
            assert_eq!(guess(&mut state, c), GuessResult::Miss);
        }
        assert_eq!(guess(&mut state, 'W'), GuessResult::Lost);
        assert_eq!(state.status(), PuzzleStatus::Lost);
        assert_eq!(state.remaining_attempts(), 0);
    }

    #[test]
    fn test_duplicate_guess_is_ignored() {
        let mut state = state("SAVE");
        guess(&mut state, 'Q');
        let before = state.clone();
        assert_eq!(guess(&mut state, 'q'), GuessResult::DuplicateGuess);
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut state = state("A");
        assert_eq!(guess(&mut state, 'a'), GuessResult::Won);
        let before = state.clone();
        assert_eq!(guess(&mut state, 'b'), GuessResult::AlreadyTerminal);
        assert_eq!(guess(&mut state, 'a'), GuessResult::AlreadyTerminal);
        assert_eq!(state, before);
    }

    #[test]
    fn test_phrase_fixed_characters_are_revealed() {
        let mut state = state("Needs-Wants");
        assert_eq!(state.masked_string(), "_____-_____");
        for c in "NEDSWAT".chars() {
            guess(&mut state, c);
        }
        assert_eq!(state.status(), PuzzleStatus::Won);
        assert_eq!(state.masked_string(), "NEEDS-WANTS");
    }

    #[test]
    fn test_accepted_results() {
        assert!(GuessResult::Hit.is_accepted());
        assert!(GuessResult::Lost.is_accepted());
        assert!(!GuessResult::DuplicateGuess.is_accepted());
        assert!(!GuessResult::AlreadyTerminal.is_accepted());
    }
}
