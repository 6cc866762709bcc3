//! Disc colors and the pieces that carry them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{GLYPH_BLACK, GLYPH_WHITE};

/// One of the two sides in a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// A disc on the board.
///
/// A piece is never removed once placed; captures change its color in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Turn the piece over to the opposite color.
    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }

    /// Single-character token used when rendering a board.
    pub fn glyph(&self) -> char {
        match self.color {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
