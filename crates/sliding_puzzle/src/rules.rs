//! The move engine: swipe legality and grid transitions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::Swipe;
use crate::types::{Coordinate, EMPTY, Grid};

/// Result of offering a swipe to the move engine.
///
/// Holds the grid after the attempt and the (possibly relocated)
/// empty cell. An illegal swipe hands the inputs back unchanged; the
/// caller stores both either way and re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    grid: Grid,
    empty: Coordinate,
}

impl MoveOutcome {
    /// The grid after the attempt.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The empty cell after the attempt.
    pub fn empty(&self) -> Coordinate {
        self.empty
    }

    /// Consumes the outcome, yielding the grid and empty cell.
    pub fn into_parts(self) -> (Grid, Coordinate) {
        (self.grid, self.empty)
    }
}

impl Grid {
    /// Attempts to slide a tile.
    ///
    /// A swipe in direction `D` is legal only when the touched cell is
    /// the immediate neighbor of the empty cell on the side opposite
    /// `D`: the drag pulls the empty cell in the swipe direction and
    /// the tile behind it slides in to fill the gap. A legal swipe
    /// swaps that tile into the empty slot and reports the touched
    /// cell as the new empty position. At most one tile moves per
    /// call.
    ///
    /// Anything else is a no-op that returns the inputs unchanged.
    /// Most drag samples during a gesture land here, so it is the
    /// expected common case, never an error.
    ///
    /// `empty` must be the coordinate of the cell holding the empty
    /// sentinel; every transition this method performs keeps that
    /// consistency. An `empty` outside the grid is answered with the
    /// no-op rather than trusted: row-major indexing would otherwise
    /// alias an out-of-range coordinate onto a real cell.
    #[instrument(level = "trace", skip(self), fields(swipe = %swipe))]
    pub fn try_move(&self, empty: Coordinate, swipe: Swipe) -> MoveOutcome {
        let in_bounds = empty.column < self.side && empty.row < self.side;
        let (dc, dr) = swipe.direction.pulls_from();
        let legal = in_bounds
            && empty
                .offset(dc, dr, self.side)
                .is_some_and(|source| source == swipe.cell);
        if !legal {
            return MoveOutcome {
                grid: self.clone(),
                empty,
            };
        }

        let mut cells = self.cells.clone();
        let empty_index = self.index(empty);
        let touched_index = self.index(swipe.cell);
        cells[empty_index] = cells[touched_index];
        cells[touched_index] = EMPTY;
        MoveOutcome {
            grid: Grid {
                side: self.side,
                cells,
            },
            empty: swipe.cell,
        }
    }
}
