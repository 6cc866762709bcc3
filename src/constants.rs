//! Constants for board geometry, the starting layout, and display glyphs.
//!
//! The rules target exactly one board: the standard 8x8 Othello grid.
//! Nothing here is configurable at build time.

use crate::piece::Color;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Column letters used by algebraic coordinates ("A1" .. "H8").
pub const COLUMNS: &str = "ABCDEFGH";

// =============================================================================
// Direction Offsets
// =============================================================================

/// Unit offsets (row, column) to the eight neighbouring cells.
/// Order: N, NE, E, SE, S, SW, W, NW
pub const DELTA: [(i32, i32); 8] = [
    (-1, 0),  // North (up one row)
    (-1, 1),  // NE (diagonal)
    (0, 1),   // East (right one column)
    (1, 1),   // SE (diagonal)
    (1, 0),   // South (down one row)
    (1, -1),  // SW (diagonal)
    (0, -1),  // West (left one column)
    (-1, -1), // NW (diagonal)
];

// =============================================================================
// Starting Layout
// =============================================================================

/// The four centre discs present before the first move, as (row, col, color).
pub const STARTING_LAYOUT: [(i32, i32, Color); 4] = [
    (3, 3, Color::White),
    (3, 4, Color::Black),
    (4, 3, Color::Black),
    (4, 4, Color::White),
];

// =============================================================================
// Display Glyphs
// =============================================================================

/// Black disc.
pub const GLYPH_BLACK: char = 'X';

/// White disc.
pub const GLYPH_WHITE: char = 'O';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
