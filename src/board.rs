//! The 8x8 Othello grid and the capture rules that act on it.
//!
//! Pieces live in a flat arena owned by the board; grid cells hold a
//! [`PieceId`] into it. A capture flips the arena record, so the piece on a
//! cell keeps its identity for the rest of the game and only its color
//! changes.

use std::fmt;

use thiserror::Error;

use crate::constants::{CELLS, COLUMNS, GLYPH_EMPTY, N, STARTING_LAYOUT};
use crate::piece::{Color, Piece};
use crate::position::{Direction, Pos};

/// Stable identity of a piece placed on a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// Result of scanning outward from an anchor along one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// The run of opposing pieces ended at a piece of the scanning color.
    /// These positions would be flipped. May be empty.
    Line(Vec<Pos>),
    /// The run hit the edge of the board or an empty cell first.
    Discard,
}

impl Capture {
    /// Positions to flip; empty for [`Capture::Discard`].
    pub fn positions(&self) -> &[Pos] {
        match self {
            Capture::Line(line) => line,
            Capture::Discard => &[],
        }
    }

    /// True when nothing would be flipped along this direction.
    pub fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }
}

/// Error returned by [`Board::place_piece`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The cell is off the board, already occupied, or flips nothing.
    #[error("illegal move: {color} at {pos}")]
    InvalidMove { pos: Pos, color: Color },
}

/// An Othello board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells, indexed by [`Pos::index`].
    grid: [Option<PieceId>; CELLS],
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the standard four centre discs.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col, color) in STARTING_LAYOUT {
            board.put(Pos::new(row, col), color);
        }
        board
    }

    /// A board with no discs at all. Used to set up arbitrary positions.
    pub fn empty() -> Self {
        Self {
            grid: [None; CELLS],
            pieces: Vec::with_capacity(CELLS),
        }
    }

    /// Place a disc without any legality check, replacing whatever was there.
    ///
    /// Intended for building test positions and puzzles; game play goes
    /// through [`Board::place_piece`]. Off-board positions are ignored.
    pub fn set(&mut self, pos: Pos, color: Color) {
        match self.piece_id(pos) {
            Some(id) => self.pieces[id.0] = Piece::new(color),
            None => self.put(pos, color),
        }
    }

    fn put(&mut self, pos: Pos, color: Color) {
        let Some(idx) = pos.index() else {
            return;
        };
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(color));
        self.grid[idx] = Some(id);
    }

    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        pos.is_valid()
    }

    /// Identity of the piece at `pos`, if any.
    pub fn piece_id(&self, pos: Pos) -> Option<PieceId> {
        pos.index().and_then(|idx| self.grid[idx])
    }

    pub fn get_piece(&self, pos: Pos) -> Option<&Piece> {
        self.piece_id(pos).map(|id| &self.pieces[id.0])
    }

    /// Off-board positions are never occupied.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.piece_id(pos).is_some()
    }

    pub fn is_mine(&self, pos: Pos, color: Color) -> bool {
        self.get_piece(pos).is_some_and(|p| p.color() == color)
    }

    /// Walk from `start` along `dir`, collecting opposing pieces until a piece
    /// of `color` closes the line.
    ///
    /// `start` is the first cell to examine, one step away from the anchor.
    /// Leaving the board or meeting an empty cell before the closing piece
    /// discards the whole line.
    pub fn scan(&self, start: Pos, color: Color, dir: Direction) -> Capture {
        let mut line = Vec::new();
        let mut cur = start;
        loop {
            let Some(piece) = self.get_piece(cur) else {
                return Capture::Discard;
            };
            if piece.color() == color {
                return Capture::Line(line);
            }
            line.push(cur);
            cur = cur.step(dir);
        }
    }

    /// Every position flipped by playing `color` at `anchor`, grouped by
    /// direction in [`Direction::ALL`] order. Empty if the cell is off the
    /// board or occupied.
    pub fn captures(&self, anchor: Pos, color: Color) -> Vec<Pos> {
        if !anchor.is_valid() || self.is_occupied(anchor) {
            return Vec::new();
        }
        Direction::ALL
            .iter()
            .flat_map(|&dir| match self.scan(anchor.step(dir), color, dir) {
                Capture::Line(line) => line,
                Capture::Discard => Vec::new(),
            })
            .collect()
    }

    pub fn valid_move(&self, pos: Pos, color: Color) -> bool {
        if !pos.is_valid() || self.is_occupied(pos) {
            return false;
        }
        Direction::ALL
            .iter()
            .any(|&dir| !self.scan(pos.step(dir), color, dir).is_empty())
    }

    /// Legal moves for `color` in row-major order.
    pub fn valid_moves(&self, color: Color) -> Vec<Pos> {
        Pos::all().filter(|&pos| self.valid_move(pos, color)).collect()
    }

    pub fn has_move(&self, color: Color) -> bool {
        Pos::all().any(|pos| self.valid_move(pos, color))
    }

    /// Play `color` at `pos` and flip every captured piece.
    ///
    /// Returns the flipped positions. On error the board is untouched.
    pub fn place_piece(&mut self, pos: Pos, color: Color) -> Result<Vec<Pos>, MoveError> {
        let flipped = self.captures(pos, color);
        if flipped.is_empty() {
            return Err(MoveError::InvalidMove { pos, color });
        }

        self.put(pos, color);
        for &p in &flipped {
            if let Some(id) = self.piece_id(p) {
                self.pieces[id.0].flip();
            }
        }
        Ok(flipped)
    }

    /// Neither side can move.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::White) && !self.has_move(Color::Black)
    }

    /// Number of discs showing `color`.
    pub fn count(&self, color: Color) -> usize {
        Pos::all().filter(|&pos| self.is_mine(pos, color)).count()
    }

    pub fn empty_count(&self) -> usize {
        Pos::all().filter(|&pos| !self.is_occupied(pos)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in COLUMNS.chars() {
            write!(f, " {c}")?;
        }
        writeln!(f)?;
        for row in 0..N as i32 {
            write!(f, "{}", row + 1)?;
            for col in 0..N as i32 {
                let ch = match self.get_piece(Pos::new(row, col)) {
                    Some(piece) => piece.glyph(),
                    None => GLYPH_EMPTY,
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EAST: Direction = Direction::ALL[2];
    const SOUTH: Direction = Direction::ALL[4];

    fn row_board(cells: &[(i32, Color)]) -> Board {
        let mut board = Board::empty();
        for &(col, color) in cells {
            board.set(Pos::new(0, col), color);
        }
        board
    }

    #[test]
    fn test_scan_closed_line() {
        let board = row_board(&[(1, Color::White), (2, Color::White), (3, Color::Black)]);
        let capture = board.scan(Pos::new(0, 1), Color::Black, EAST);
        assert_eq!(capture, Capture::Line(vec![Pos::new(0, 1), Pos::new(0, 2)]));
    }

    #[test]
    fn test_scan_runs_off_edge() {
        let board = row_board(&[(5, Color::White), (6, Color::White), (7, Color::White)]);
        assert_eq!(board.scan(Pos::new(0, 5), Color::Black, EAST), Capture::Discard);
    }

    #[test]
    fn test_scan_gap_breaks_line() {
        let board = row_board(&[(1, Color::White), (3, Color::Black)]);
        assert_eq!(board.scan(Pos::new(0, 1), Color::Black, EAST), Capture::Discard);
    }

    #[test]
    fn test_scan_empty_neighbour() {
        let board = Board::empty();
        assert_eq!(board.scan(Pos::new(0, 1), Color::Black, EAST), Capture::Discard);
    }

    #[test]
    fn test_scan_immediate_own_piece() {
        let board = row_board(&[(1, Color::Black)]);
        let capture = board.scan(Pos::new(0, 1), Color::Black, EAST);
        assert_eq!(capture, Capture::Line(Vec::new()));
        assert!(capture.is_empty());
    }

    #[test]
    fn test_scan_starting_off_board() {
        let board = Board::new();
        assert_eq!(board.scan(Pos::new(8, 3), Color::Black, SOUTH), Capture::Discard);
    }

    #[test]
    fn test_scan_terminates_in_every_direction() {
        // A board full of white discs: every black scan must run off an edge.
        let mut board = Board::empty();
        for pos in Pos::all() {
            board.set(pos, Color::White);
        }
        for start in Pos::all() {
            for dir in Direction::ALL {
                let capture = board.scan(start, Color::Black, dir);
                assert_eq!(capture, Capture::Discard, "{start} along {dir:?}");
            }
        }
    }

    #[test]
    fn test_set_off_board_is_ignored() {
        let mut board = Board::empty();
        board.set(Pos::new(-1, 0), Color::Black);
        board.set(Pos::new(0, 8), Color::White);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_starting_captures() {
        let board = Board::new();
        assert_eq!(board.captures(Pos::new(2, 3), Color::Black), vec![Pos::new(3, 3)]);
        assert!(board.captures(Pos::new(3, 3), Color::Black).is_empty());
        assert!(board.captures(Pos::new(-1, 3), Color::Black).is_empty());
    }

    #[test]
    fn test_off_board_queries() {
        let board = Board::new();
        assert!(!board.is_occupied(Pos::new(-1, 0)));
        assert!(!board.is_mine(Pos::new(0, 8), Color::Black));
        assert!(board.get_piece(Pos::new(9, 9)).is_none());
        assert!(!board.valid_move(Pos::new(-1, 4), Color::White));
    }

    #[test]
    fn test_set_replaces_color() {
        let mut board = Board::new();
        let before = board.piece_id(Pos::new(3, 3));
        board.set(Pos::new(3, 3), Color::Black);
        assert_eq!(board.piece_id(Pos::new(3, 3)), before);
        assert!(board.is_mine(Pos::new(3, 3), Color::Black));
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  A B C D E F G H");
        assert_eq!(lines[4], "4 . . . O X . . .");
        assert_eq!(lines[5], "5 . . . X O . . .");
    }
}
