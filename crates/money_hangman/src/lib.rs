//! Money Hangman - guessing game engine for the budgeting lesson
//!
//! Pure game logic with no I/O: the state machine for one puzzle, the
//! figure reveal table, XP scoring, and a session that plays puzzles in
//! order and produces render-ready views.
//!
//! # Architecture
//!
//! - **Figure**: miss count to visible [`Segment`]s
//! - **State**: [`PuzzleState`] tracks guesses, misses and the outcome
//! - **Score**: [`ScoreTracker`] accumulates XP, never below zero
//! - **Session**: [`GameSession`] wires guesses into scoring and views
//!
//! # Example
//!
//! ```
//! use money_hangman::{GameSession, GuessResult, Letter, WordBank, XpPolicy};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bank = WordBank::from_entries([("budget", Some("A spending plan"))])?;
//! let mut session = GameSession::new(bank, XpPolicy::new(10, -5, 50, -20))?;
//!
//! let view = session.submit_guess("b".parse::<Letter>()?)?;
//! assert_eq!(view.masked_text(), "B_____");
//! assert_eq!(*view.last_result(), Some(GuessResult::Hit));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod figure;
mod letter;
mod puzzle;
mod score;
mod session;
mod source;
mod state;

pub mod invariants;

// Crate-level exports - Input
pub use letter::{Letter, LetterError};

// Crate-level exports - Puzzle definitions
pub use puzzle::{AnswerChar, MAX_INCORRECT_ATTEMPTS, Puzzle, PuzzleError};

// Crate-level exports - Figure reveal
pub use figure::{Figure, Segment, segments_for};

// Crate-level exports - Puzzle state machine
pub use state::{GuessResult, MaskedCell, PuzzleState, PuzzleStatus};

// Crate-level exports - Scoring
pub use score::{ScoreEvent, ScoreTracker, XpPolicy};

// Crate-level exports - Puzzle supply
pub use source::{IterSource, PuzzleSource, WordBank};

// Crate-level exports - Session
pub use session::{GameSession, SessionEnded, SessionSummary, SessionView};
