//! Board coordinates and scan directions.
//!
//! A [`Pos`] is a plain (row, column) pair of signed integers. Positions off
//! the board are representable on purpose: directional scans step past the
//! edge and then test [`Pos::is_valid`] instead of guarding every subtraction.
//!
//! Algebraic notation names the column with a letter `A`..`H` and the row
//! with a digit `1`..`8`, so `"A1"` is row 0, column 0 and `"D3"` is row 2,
//! column 3.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{COLUMNS, DELTA, N};

/// A (row, column) pair. Valid positions have both coordinates in `0..8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True iff both coordinates lie on the board.
    pub fn is_valid(self) -> bool {
        let n = N as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// The neighbouring position one step along `dir`. May be off the board.
    pub fn step(self, dir: Direction) -> Self {
        Self {
            row: self.row + dir.drow,
            col: self.col + dir.dcol,
        }
    }

    /// Row-major cell index, or `None` off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.row as usize * N + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Pos::index`].
    pub fn from_index(index: usize) -> Self {
        Self::new((index / N) as i32, (index % N) as i32)
    }

    /// Every board position in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..N * N).map(Pos::from_index)
    }
}

/// Renders algebraic notation for valid positions, `(row,col)` otherwise.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let col = COLUMNS.as_bytes()[self.col as usize] as char;
        write!(f, "{col}{}", self.row + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate: {0:?}")]
pub struct ParseCoordError(pub String);

impl FromStr for Pos {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s)
    }
}

/// Parse algebraic notation ("D3", case-insensitive).
pub fn parse_coord(s: &str) -> Result<Pos, ParseCoordError> {
    let err = || ParseCoordError(s.to_string());
    let mut chars = s.trim().chars();

    let col_ch = chars.next().ok_or_else(err)?.to_ascii_uppercase();
    let col = COLUMNS.find(col_ch).ok_or_else(err)? as i32;

    let row_str = chars.as_str();
    if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let row: i32 = row_str.parse().map_err(|_| err())?;

    let pos = Pos::new(row - 1, col);
    if pos.is_valid() { Ok(pos) } else { Err(err()) }
}

/// Format a position in algebraic notation.
pub fn str_coord(pos: Pos) -> String {
    pos.to_string()
}

/// One of the eight unit vectors (Δrow, Δcol), never (0, 0).
///
/// Only the values in [`Direction::ALL`] exist; scans rely on every
/// direction moving exactly one cell per step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    drow: i32,
    dcol: i32,
}

impl Direction {
    pub fn drow(self) -> i32 {
        self.drow
    }

    pub fn dcol(self) -> i32 {
        self.dcol
    }

    /// All eight compass directions, in the order of [`DELTA`].
    pub const ALL: [Direction; 8] = {
        let mut dirs = [Direction { drow: 0, dcol: 0 }; 8];
        let mut i = 0;
        while i < 8 {
            dirs[i] = Direction {
                drow: DELTA[i].0,
                dcol: DELTA[i].1,
            };
            i += 1;
        }
        dirs
    };
}
