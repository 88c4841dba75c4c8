//! Sliding number puzzle core logic.
//!
//! The logical heart of a sliding-number puzzle: a square grid of
//! numbered tiles plus one empty cell, rearranged by dragging a tile
//! into the gap. This crate owns the grid model, the shuffle, the move
//! engine, and the gesture classification. Rendering and input
//! plumbing live with the caller, which feeds in drag samples and
//! keeps the returned grid between events.
//!
//! # Architecture
//!
//! - **Grid**: immutable permutation of `0..side²` with one empty cell
//! - **Gesture**: drag vector → direction, pointer position → cell
//! - **Move engine**: (grid, empty, swipe) → new grid and empty cell
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use sliding_puzzle::{DragVector, Grid, Swipe, TouchPoint, classify_drag, locate_touched_cell};
//!
//! # fn main() -> Result<(), sliding_puzzle::GridError> {
//! let mut rng = SmallRng::seed_from_u64(7);
//! let grid = Grid::shuffled(3, &mut rng);
//! let empty = grid.locate_empty()?;
//!
//! // One drag sample from the presentation layer.
//! if let Some(direction) = classify_drag(DragVector::new(12.0, 3.0)) {
//!     let touched = locate_touched_cell(TouchPoint::new(150.0, 150.0), grid.side(), 100.0);
//!     if let Some(cell) = touched {
//!         let (grid, empty) = grid.try_move(empty, Swipe::new(direction, cell)).into_parts();
//!         // The caller stores grid and empty for the next sample.
//!         # let _ = (grid, empty);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod gesture;
mod invariants;
mod rules;
mod types;

// Crate-level exports - actions
pub use action::Swipe;

// Crate-level exports - errors
pub use error::GridError;

// Crate-level exports - gesture classification
pub use gesture::{DragVector, TouchPoint, classify_drag, locate_touched_cell};

// Crate-level exports - invariants
pub use invariants::{
    EmptyConsistentInvariant, Invariant, InvariantSet, InvariantViolation, PermutationInvariant,
    SessionInvariants,
};

// Crate-level exports - move engine
pub use rules::MoveOutcome;

// Crate-level exports - domain types
pub use types::{Coordinate, Direction, EMPTY, Grid};
