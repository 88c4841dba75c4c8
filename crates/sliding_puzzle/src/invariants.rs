//! First-class invariants for the puzzle grid.
//!
//! Invariants are logical properties that must hold throughout a
//! session. They are testable independently and serve as documentation
//! of the guarantees the shuffle and the move engine preserve.

use crate::types::{Coordinate, Grid};

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

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The cells hold every value in `0..side²` exactly once.
#[derive(Debug, Clone, Copy)]
pub struct PermutationInvariant;

impl Invariant<Grid> for PermutationInvariant {
    fn holds(state: &Grid) -> bool {
        state.is_permutation()
    }

    fn description() -> &'static str {
        "grid cells form a permutation of 0..side² with one empty cell"
    }
}

impl Invariant<(Grid, Coordinate)> for PermutationInvariant {
    fn holds((grid, _): &(Grid, Coordinate)) -> bool {
        grid.is_permutation()
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}

/// The cached empty position points at the cell holding the sentinel.
#[derive(Debug, Clone, Copy)]
pub struct EmptyConsistentInvariant;

impl Invariant<(Grid, Coordinate)> for EmptyConsistentInvariant {
    fn holds((grid, empty): &(Grid, Coordinate)) -> bool {
        grid.locate_empty().is_ok_and(|found| found == *empty)
    }

    fn description() -> &'static str {
        "cached empty position matches the cell holding the sentinel"
    }
}

/// All session invariants as a composable set over a grid and its
/// cached empty position.
pub type SessionInvariants = (PermutationInvariant, EmptyConsistentInvariant);
