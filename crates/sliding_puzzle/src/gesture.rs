//! Swipe classification and touch-to-cell mapping.
//!
//! Stateless helpers sitting between raw pointer events and the move
//! engine. The caller feeds every incremental drag sample through
//! [`classify_drag`]; classification has no memory, so the direction
//! may flicker between samples of one continuous gesture. That is
//! accepted behavior: illegal results become no-ops downstream.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Coordinate, Direction};

/// An incremental drag displacement since the previous sample, in
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragVector {
    /// Horizontal displacement; positive is rightward.
    pub dx: f32,
    /// Vertical displacement; positive is downward.
    pub dy: f32,
}

impl DragVector {
    /// Creates a new drag vector.
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// An absolute pointer position in pixels, relative to the grid's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl TouchPoint {
    /// Creates a new touch point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Classifies a drag displacement as a cardinal direction.
///
/// The axis with the larger magnitude wins and the sign on that axis
/// picks the direction. Equal magnitudes, including the zero vector,
/// yield `None`: ties and stillness produce no direction.
#[instrument(level = "trace")]
pub fn classify_drag(drag: DragVector) -> Option<Direction> {
    if drag.dx.abs() > drag.dy.abs() {
        Some(if drag.dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if drag.dy.abs() > drag.dx.abs() {
        Some(if drag.dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    } else {
        None
    }
}

/// Maps a pointer position to the grid cell under it.
///
/// Cells are `cell_size` pixels square. Coordinates truncate
/// downward, so a position exactly on a cell boundary belongs to the
/// higher-indexed cell. Positions outside the grid, and non-positive
/// cell sizes, yield `None`.
#[instrument(level = "trace")]
pub fn locate_touched_cell(
    position: TouchPoint,
    side: usize,
    cell_size: f32,
) -> Option<Coordinate> {
    if cell_size <= 0.0 {
        return None;
    }
    let column = (position.x / cell_size).floor();
    let row = (position.y / cell_size).floor();
    if column < 0.0 || row < 0.0 || column >= side as f32 || row >= side as f32 {
        return None;
    }
    Some(Coordinate::new(column as usize, row as usize))
}
