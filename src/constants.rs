//! Constants for board geometry and engine parameters.
//!
//! Unlike Go engines that fix the board size at compile time, a Hex board
//! is sized at runtime from user input, so the geometry constants here
//! cover only the parts independent of the size: the virtual wall vertices
//! appended after the cell vertices and the hexagonal adjacency offsets.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 2;

/// Number of virtual wall vertices appended after the `size * size` cell
/// vertices: left/right for Blue, bottom/top for Red.
pub const N_WALLS: usize = 4;

/// Offsets to the six neighbors of a hex cell, as (row, col) deltas.
/// Order: left, right, bottom-left, bottom-right, top-left, top-right.
pub const HEX_NEIGHBORS: [(isize, isize); 6] =
    [(0, -1), (0, 1), (1, -1), (1, 0), (-1, 0), (-1, 1)];

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of rollouts per computer move.
pub const N_ITERATIONS: usize = 10_000;
