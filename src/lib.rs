//! Othello-Rules: the rules of Othello/Reversi on the standard 8x8 board.
//!
//! This crate decides move legality and resolves captures. It has no
//! opponent logic; callers choose the moves.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, directions, starting layout
//! - [`piece`] - Disc colors and flippable pieces
//! - [`position`] - Coordinates, directions, algebraic notation
//! - [`board`] - The grid, directional capture scans, move application
//! - [`game`] - Turn order, forced passes, scoring
//! - [`protocol`] - Text command protocol for external front ends
//!
//! ## Example
//!
//! ```
//! use othello_rules::board::Board;
//! use othello_rules::piece::Color;
//! use othello_rules::position::parse_coord;
//!
//! let mut board = Board::new();
//! assert_eq!(board.valid_moves(Color::Black).len(), 4);
//!
//! let flipped = board.place_piece(parse_coord("D3").unwrap(), Color::Black).unwrap();
//! assert_eq!(flipped, vec![parse_coord("D4").unwrap()]);
//! assert_eq!(board.count(Color::Black), 4);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod piece;
pub mod position;
pub mod protocol;
