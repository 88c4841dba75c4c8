//! Tests for drag classification and touch-to-cell mapping.

use sliding_puzzle::{Coordinate, Direction, DragVector, TouchPoint, classify_drag, locate_touched_cell};

#[test]
fn test_equal_magnitudes_yield_no_direction() {
    assert_eq!(classify_drag(DragVector::new(5.0, 5.0)), None);
    assert_eq!(classify_drag(DragVector::new(5.0, -5.0)), None);
    assert_eq!(classify_drag(DragVector::new(-5.0, 5.0)), None);
}

#[test]
fn test_zero_vector_yields_no_direction() {
    assert_eq!(classify_drag(DragVector::new(0.0, 0.0)), None);
}

#[test]
fn test_dominant_axis_picks_direction() {
    assert_eq!(classify_drag(DragVector::new(10.0, 3.0)), Some(Direction::Right));
    assert_eq!(classify_drag(DragVector::new(-10.0, 3.0)), Some(Direction::Left));
    assert_eq!(classify_drag(DragVector::new(3.0, 10.0)), Some(Direction::Down));
    assert_eq!(classify_drag(DragVector::new(3.0, -10.0)), Some(Direction::Up));
}

#[test]
fn test_touch_maps_to_containing_cell() {
    assert_eq!(
        locate_touched_cell(TouchPoint::new(250.0, 50.0), 3, 100.0),
        Some(Coordinate::new(2, 0))
    );
    assert_eq!(
        locate_touched_cell(TouchPoint::new(0.0, 0.0), 3, 100.0),
        Some(Coordinate::new(0, 0))
    );
}

#[test]
fn test_cell_boundary_belongs_to_higher_cell() {
    assert_eq!(
        locate_touched_cell(TouchPoint::new(100.0, 50.0), 3, 100.0),
        Some(Coordinate::new(1, 0))
    );
}

#[test]
fn test_touch_outside_grid_yields_none() {
    // x = 300 / 100 = column 3, out of range for side 3.
    assert_eq!(locate_touched_cell(TouchPoint::new(300.0, 50.0), 3, 100.0), None);
    assert_eq!(locate_touched_cell(TouchPoint::new(50.0, 300.0), 3, 100.0), None);
    assert_eq!(locate_touched_cell(TouchPoint::new(-1.0, 50.0), 3, 100.0), None);
}

#[test]
fn test_degenerate_cell_size_yields_none() {
    assert_eq!(locate_touched_cell(TouchPoint::new(50.0, 50.0), 3, 0.0), None);
    assert_eq!(locate_touched_cell(TouchPoint::new(50.0, 50.0), 3, -100.0), None);
}
