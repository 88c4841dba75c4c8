//! Error types for the puzzle core.

use derive_more::{Display, Error};

/// Error raised when a grid violates the permutation invariant.
///
/// An illegal swipe is *not* an error; the move engine answers it with
/// the unchanged grid. `CorruptState` only appears when the invariant
/// itself is broken, which indicates a defect upstream and should be
/// treated as fatal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The cells are not a permutation of `0..side²` with a single
    /// empty cell.
    #[display("corrupt grid state: cells are not a permutation with a single empty cell")]
    CorruptState,
}
