//! Puzzle definitions supplied by the word bank.

use crate::Letter;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Number of misses that ends a round.
pub const MAX_INCORRECT_ATTEMPTS: u8 = 6;

/// Characters allowed in an answer that are never guessed.
///
/// They are shown from the start and do not count toward completing the word.
const FIXED_CHARACTERS: &[char] = &[' ', '-', '\''];

/// One character of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerChar {
    /// A letter the player has to guess.
    Letter(Letter),
    /// Punctuation, digits or spacing shown as-is.
    Fixed(char),
}

/// A word or phrase to guess, plus optional hint text.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle", into = "RawPuzzle")]
pub struct Puzzle {
    /// Normalized answer, one entry per character.
    answer: Vec<AnswerChar>,
    /// Hint shown alongside the masked answer.
    hint: Option<String>,
}

impl Puzzle {
    /// Builds a puzzle, normalizing letters to uppercase.
    ///
    /// Fails if the answer contains no letters or characters outside
    /// ASCII letters, digits, spaces, hyphens and apostrophes.
    #[instrument(skip(answer, hint), fields(answer_len = answer.as_ref().len()))]
    pub fn new(answer: impl AsRef<str>, hint: Option<String>) -> Result<Self, PuzzleError> {
        let answer = answer
            .as_ref()
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Letter::new(c)
                        .map(AnswerChar::Letter)
                        .map_err(|_| PuzzleError::UnsupportedCharacter(c))
                } else if c.is_ascii_digit() || FIXED_CHARACTERS.contains(&c) {
                    Ok(AnswerChar::Fixed(c))
                } else {
                    warn!(?c, "Unsupported character in answer");
                    Err(PuzzleError::UnsupportedCharacter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !answer.iter().any(|c| matches!(c, AnswerChar::Letter(_))) {
            warn!("Answer has no guessable letters");
            return Err(PuzzleError::NoLetters);
        }

        Ok(Self { answer, hint })
    }

    /// Distinct letters that must be guessed to win.
    pub fn letters(&self) -> BTreeSet<Letter> {
        self.answer
            .iter()
            .filter_map(|c| match c {
                AnswerChar::Letter(letter) => Some(*letter),
                AnswerChar::Fixed(_) => None,
            })
            .collect()
    }

    /// Returns true if `letter` occurs anywhere in the answer.
    pub fn contains(&self, letter: Letter) -> bool {
        self.answer.contains(&AnswerChar::Letter(letter))
    }

    /// The answer as plain uppercase text.
    pub fn answer_text(&self) -> String {
        self.answer
            .iter()
            .map(|c| match c {
                AnswerChar::Letter(letter) => letter.as_char(),
                AnswerChar::Fixed(c) => *c,
            })
            .collect()
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.answer_text())
    }
}

/// Serialized form of a [`Puzzle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPuzzle {
    answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        Puzzle::new(raw.answer, raw.hint)
    }
}

impl From<Puzzle> for RawPuzzle {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            answer: puzzle.answer_text(),
            hint: puzzle.hint,
        }
    }
}

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// The answer has nothing to guess.
    #[display("Answer must contain at least one letter")]
    NoLetters,

    /// The answer contains a character the game cannot show or guess.
    #[display("Unsupported character {:?} in answer", _0)]
    UnsupportedCharacter(#[error(not(source))] char),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_answer_is_uppercased() {
        let puzzle = Puzzle::new("budget", None).unwrap();
        assert_eq!(puzzle.answer_text(), "BUDGET");
        assert!(puzzle.contains(letter('b')));
    }

    #[test]
    fn test_letters_are_distinct() {
        let puzzle = Puzzle::new("SAVINGS", None).unwrap();
        assert_eq!(puzzle.letters().len(), 6);
    }

    #[test]
    fn test_phrase_keeps_fixed_characters() {
        let puzzle = Puzzle::new("Rainy-day fund", Some("For surprises".to_string())).unwrap();
        assert_eq!(puzzle.answer_text(), "RAINY-DAY FUND");
        assert!(puzzle.answer().contains(&AnswerChar::Fixed(' ')));
        assert_eq!(puzzle.hint().as_deref(), Some("For surprises"));
    }

    #[test]
    fn test_rejects_answer_without_letters() {
        assert_eq!(Puzzle::new("", None), Err(PuzzleError::NoLetters));
        assert_eq!(Puzzle::new(" 401 ", None), Err(PuzzleError::NoLetters));
    }

    #[test]
    fn test_rejects_unsupported_characters() {
        assert_eq!(
            Puzzle::new("SAVE$", None),
            Err(PuzzleError::UnsupportedCharacter('$'))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let puzzle: Puzzle =
            serde_json::from_str(r#"{"answer":"income","hint":"Money in"}"#).unwrap();
        assert_eq!(puzzle.answer_text(), "INCOME");
        assert!(serde_json::from_str::<Puzzle>(r#"{"answer":"!!"}"#).is_err());
    }
}
