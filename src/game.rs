//! Game sessions: whose turn it is, forced passes, and the final score.
//!
//! [`Board`] knows nothing about turn order. [`Game`] adds it on top: black
//! opens, sides alternate, and a side with no legal move passes
//! automatically as long as the other side can still play.

use crate::board::{Board, MoveError};
use crate::piece::Color;
use crate::position::Pos;

/// A move that was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub color: Color,
    pub pos: Pos,
    /// Positions flipped by this move.
    pub flipped: Vec<Pos>,
    /// The opponent had no reply and passed; `color` moves again.
    pub opponent_passed: bool,
}

/// Disc counts for both sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub black: usize,
    pub white: usize,
}

impl Outcome {
    /// The side with more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Color> {
        use std::cmp::Ordering::*;
        match self.black.cmp(&self.white) {
            Greater => Some(Color::Black),
            Less => Some(Color::White),
            Equal => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side: Color,
    history: Vec<Turn>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side: Color::Black,
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position with `side` to move. If `side` has no
    /// legal move but the opponent does, the opponent moves first.
    pub fn from_board(board: Board, side: Color) -> Self {
        let side = if !board.has_move(side) && board.has_move(!side) {
            !side
        } else {
            side
        };
        Self {
            board,
            side,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move, or `None` once neither side can play.
    pub fn to_move(&self) -> Option<Color> {
        if self.board.is_over() {
            None
        } else {
            Some(self.side)
        }
    }

    /// Play for the side to move.
    pub fn play(&mut self, pos: Pos) -> Result<Turn, MoveError> {
        let color = self.side;
        if self.to_move().is_none() {
            return Err(MoveError::InvalidMove { pos, color });
        }
        let flipped = self.board.place_piece(pos, color)?;

        let opponent = !color;
        let opponent_passed = !self.board.has_move(opponent) && self.board.has_move(color);
        if !opponent_passed {
            self.side = opponent;
        }

        let turn = Turn {
            color,
            pos,
            flipped,
            opponent_passed,
        };
        self.history.push(turn.clone());
        Ok(turn)
    }

    /// Play as `color`, which must be the side to move.
    pub fn play_as(&mut self, color: Color, pos: Pos) -> Result<Turn, MoveError> {
        if self.to_move() != Some(color) {
            return Err(MoveError::InvalidMove { pos, color });
        }
        self.play(pos)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Current disc counts.
    pub fn score(&self) -> Outcome {
        Outcome {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    /// Final disc counts, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_opens() {
        let game = Game::new();
        assert_eq!(game.to_move(), Some(Color::Black));
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_sides_alternate() {
        let mut game = Game::new();
        let turn = game.play(Pos::new(2, 3)).unwrap();
        assert_eq!(turn.color, Color::Black);
        assert_eq!(turn.flipped, vec![Pos::new(3, 3)]);
        assert!(!turn.opponent_passed);
        assert_eq!(game.to_move(), Some(Color::White));
        assert_eq!(game.score(), Outcome { black: 4, white: 1 });
    }

    #[test]
    fn test_play_as_wrong_side() {
        let mut game = Game::new();
        let err = game.play_as(Color::White, Pos::new(2, 4)).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidMove {
                pos: Pos::new(2, 4),
                color: Color::White
            }
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut game = Game::new();
        assert!(game.play(Pos::new(0, 0)).is_err());
        assert_eq!(game.to_move(), Some(Color::Black));
    }

    #[test]
    fn test_winner() {
        assert_eq!(Outcome { black: 40, white: 24 }.winner(), Some(Color::Black));
        assert_eq!(Outcome { black: 10, white: 54 }.winner(), Some(Color::White));
        assert_eq!(Outcome { black: 32, white: 32 }.winner(), None);
    }
}
