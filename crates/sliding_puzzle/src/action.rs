//! First-class swipe actions.
//!
//! A swipe is a domain event, not a side effect: the direction the
//! player dragged plus the cell under their pointer. It can be
//! validated, serialized for replay, and logged independently of
//! execution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Coordinate, Direction};

/// A player's swipe: a drag direction over a touched cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swipe {
    /// The direction of the drag.
    pub direction: Direction,
    /// The cell under the pointer when the drag was sampled.
    pub cell: Coordinate,
}

impl Swipe {
    /// Creates a new swipe.
    #[instrument]
    pub fn new(direction: Direction, cell: Coordinate) -> Self {
        Self { direction, cell }
    }

    /// Returns the swipe direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the touched cell.
    pub fn cell(&self) -> Coordinate {
        self.cell
    }
}

impl std::fmt::Display for Swipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.direction.label(), self.cell)
    }
}
