//! Guessable letters.
//!
//! Input arrives from a keyboard or an on-screen keyboard as a single
//! character. Everything past this module works with [`Letter`], which is
//! always an uppercase ASCII letter.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A single case-normalized guess letter (`A`..=`Z`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "char", into = "char")]
#[display("{}", _0)]
pub struct Letter(char);

impl Letter {
    /// Normalizes `c` to uppercase and wraps it.
    #[instrument]
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            warn!(?c, "Rejected non-letter guess");
            Err(LetterError::NotALetter(c))
        }
    }

    /// Returns the uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// All 26 letters in alphabetical order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(LetterError::TooLong(trimmed.to_string())),
        }
    }
}

/// Why a piece of input could not become a [`Letter`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LetterError {
    /// Nothing was typed.
    #[display("No letter given")]
    Empty,

    /// More than one character was typed.
    #[display("Expected a single letter, got {:?}", _0)]
    TooLong(#[error(not(source))] String),

    /// The character is not an ASCII letter.
    #[display("{:?} is not a letter", _0)]
    NotALetter(#[error(not(source))] char),
}
