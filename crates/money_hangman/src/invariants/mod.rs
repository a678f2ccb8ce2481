//! First-class invariants for a puzzle round.
//!
//! Each invariant is a logical property of [`PuzzleState`] that must hold
//! after every accepted guess. They are checked in debug builds and can be
//! tested on their own.

use crate::PuzzleState;
use tracing::{error, instrument};

pub mod incorrect_count;
pub mod status_consistent;
pub mod unique_guesses;

pub use incorrect_count::IncorrectCountInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use unique_guesses::UniqueGuessesInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// All puzzle invariants as a composable set.
pub type PuzzleInvariants = (
    UniqueGuessesInvariant,
    IncorrectCountInvariant,
    StatusConsistentInvariant,
);

/// Checks every puzzle invariant, logging and asserting on violation in
/// debug builds.
#[instrument(skip(state))]
pub fn assert_invariants(state: &PuzzleState) {
    let result = PuzzleInvariants::check_all(state);
    if let Err(violations) = &result {
        for violation in violations {
            error!(description = %violation.description, "Puzzle invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Puzzle invariants violated: {:?}", result);
}
