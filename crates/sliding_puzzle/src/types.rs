//! Core domain types for the sliding puzzle.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GridError;

/// The sentinel value held by the empty cell.
pub const EMPTY: u8 = 0;

/// A (column, row) cell coordinate.
///
/// Column always comes first in this crate; the nominal type exists so
/// the axis order cannot be swapped silently at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index (x), in `0..side`.
    pub column: usize,
    /// Row index (y), in `0..side`.
    pub row: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the neighbor at `(column + dc, row + dr)` when it lies
    /// inside a `side` by `side` grid.
    pub(crate) fn offset(self, dc: isize, dr: isize, side: usize) -> Option<Self> {
        let column = self.column.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        if column < side && row < side {
            Some(Self { column, row })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A cardinal swipe direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Upward swipe.
    Up,
    /// Downward swipe.
    Down,
    /// Leftward swipe.
    Left,
    /// Rightward swipe.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Relative position of the tile a swipe in this direction pulls.
    ///
    /// A swipe conceptually drags the empty cell in the swipe
    /// direction, so the tile that slides sits on the opposite side:
    /// swiping up pulls the tile below the empty cell into it, and so
    /// on. This inversion is the game's feel and is deliberate.
    pub(crate) fn pulls_from(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (1, 0),
            Direction::Right => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable `side` by `side` tile arrangement.
///
/// Cells hold every value in `0..side²` exactly once, stored in
/// row-major order; [`EMPTY`] marks the empty cell. Grids are values:
/// the move engine returns a new grid instead of mutating in place,
/// and the caller keeps the current grid between interaction events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) side: usize,
    pub(crate) cells: Vec<u8>,
}

impl Grid {
    /// Creates a uniformly shuffled grid.
    ///
    /// No solvability filter is applied: roughly half of random
    /// arrangements cannot be solved by single-tile slides, and
    /// callers wanting only solvable boards must filter themselves.
    ///
    /// `side` must be at least 2 and at most 16 so every tile value
    /// fits a `u8`.
    #[instrument(skip(rng))]
    pub fn shuffled<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Self {
        assert!(
            (2..=16).contains(&side),
            "grid side must be between 2 and 16"
        );
        let mut cells: Vec<u8> = (0..side * side).map(|value| value as u8).collect();
        cells.shuffle(rng);
        Self { side, cells }
    }

    /// Builds a grid from row-major cells, validating that they form a
    /// permutation of `0..side²`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CorruptState`] when the cells are the
    /// wrong length or are not a permutation.
    #[instrument(skip(cells))]
    pub fn from_cells(side: usize, cells: Vec<u8>) -> Result<Self, GridError> {
        let grid = Self { side, cells };
        if grid.cells.len() == side * side && grid.is_permutation() {
            Ok(grid)
        } else {
            Err(GridError::CorruptState)
        }
    }

    /// Grid dimension.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Bounds-checked cell read.
    pub fn get(&self, coordinate: Coordinate) -> Option<u8> {
        if coordinate.column >= self.side || coordinate.row >= self.side {
            return None;
        }
        self.cells.get(self.index(coordinate)).copied()
    }

    /// Flat index of a coordinate.
    pub(crate) fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.side + coordinate.column
    }

    /// Finds the empty cell, scanning rows top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CorruptState`] when no cell holds the
    /// empty sentinel. That means the permutation invariant was broken
    /// upstream; it signals a programming defect, not a condition the
    /// caller should continue past.
    #[instrument(skip(self))]
    pub fn locate_empty(&self) -> Result<Coordinate, GridError> {
        for row in 0..self.side {
            for column in 0..self.side {
                let coordinate = Coordinate::new(column, row);
                if self.get(coordinate) == Some(EMPTY) {
                    return Ok(coordinate);
                }
            }
        }
        Err(GridError::CorruptState)
    }

    /// Whether the cells hold every value in `0..side²` exactly once.
    pub fn is_permutation(&self) -> bool {
        if self.cells.len() != self.side * self.side {
            return false;
        }
        let mut seen = vec![false; self.cells.len()];
        for &value in &self.cells {
            match seen.get_mut(value as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side {
            for column in 0..self.side {
                match self.get(Coordinate::new(column, row)) {
                    Some(EMPTY) => write!(f, "  .")?,
                    Some(value) => write!(f, "{value:>3}")?,
                    None => {}
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let grid = Grid::shuffled(3, &mut rng);
            assert!(grid.is_permutation());
        }
    }

    #[test]
    fn test_shuffled_is_deterministic_per_seed() {
        let a = Grid::shuffled(3, &mut SmallRng::seed_from_u64(9));
        let b = Grid::shuffled(3, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_locate_empty_matches_sentinel() {
        let grid = Grid::from_cells(3, vec![1, 2, 3, 4, 0, 6, 7, 8, 5]).unwrap();
        let empty = grid.locate_empty().unwrap();
        assert_eq!(empty, Coordinate::new(1, 1));
        assert_eq!(grid.get(empty), Some(EMPTY));
    }

    #[test]
    fn test_locate_empty_rejects_missing_sentinel() {
        // Bypass from_cells to build a grid with no empty cell.
        let grid = Grid {
            side: 2,
            cells: vec![1, 2, 3, 4],
        };
        assert_eq!(grid.locate_empty(), Err(GridError::CorruptState));
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert_eq!(
            Grid::from_cells(3, vec![0, 1, 2]),
            Err(GridError::CorruptState)
        );
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        assert_eq!(
            Grid::from_cells(2, vec![0, 1, 1, 3]),
            Err(GridError::CorruptState)
        );
    }

    #[test]
    fn test_from_cells_rejects_out_of_range_values() {
        assert_eq!(
            Grid::from_cells(2, vec![0, 1, 2, 9]),
            Err(GridError::CorruptState)
        );
    }

    #[test]
    fn test_offset_respects_bounds() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 3), None);
        assert_eq!(corner.offset(0, -1, 3), None);
        assert_eq!(corner.offset(1, 0, 3), Some(Coordinate::new(1, 0)));

        let edge = Coordinate::new(2, 2);
        assert_eq!(edge.offset(1, 0, 3), None);
        assert_eq!(edge.offset(0, 1, 3), None);
    }

    #[test]
    fn test_every_direction_pulls_an_orthogonal_neighbor() {
        use strum::IntoEnumIterator;
        for direction in Direction::iter() {
            let (dc, dr) = direction.pulls_from();
            assert_eq!(dc.abs() + dr.abs(), 1, "{direction} must pull a neighbor");
        }
    }

    #[test]
    fn test_display_marks_empty_cell() {
        let grid = Grid::from_cells(2, vec![1, 2, 3, 0]).unwrap();
        let text = grid.to_string();
        assert!(text.contains('.'));
        assert!(text.contains('3'));
    }
}
