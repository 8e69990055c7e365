//! Fluent builder for constructing Othello positions.
//!
//! Allows creating positions disc by disc rather than writing out the
//! 100-character text form.
//!
//! # Example
//! ```
//! use othello_engine::board::{BoardBuilder, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .disc(Square::A1, Side::Black)
//!     .disc(Square::new(0, 1).unwrap(), Side::White)
//!     .build();
//! assert_eq!(board.disc_count(Side::White), 1);
//! ```

use super::{Board, Cell, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    discs: Vec<(Square, Side)>,
}

impl BoardBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { discs: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let initial = Board::initial();
        let discs = Square::all()
            .filter_map(|sq| initial.side_at(sq).map(|side| (sq, side)))
            .collect();
        BoardBuilder { discs }
    }

    /// Place a disc, replacing whatever was on the square.
    #[must_use]
    pub fn disc(mut self, square: Square, side: Side) -> Self {
        self.discs.retain(|(sq, _)| *sq != square);
        self.discs.push((square, side));
        self
    }

    /// Place several discs for the same side.
    #[must_use]
    pub fn discs(self, squares: &[Square], side: Side) -> Self {
        squares.iter().fold(self, |builder, &sq| builder.disc(sq, side))
    }

    /// Remove a disc from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.discs.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, side) in self.discs {
            board.set(square, Cell::Disc(side));
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::initial());
    }

    #[test]
    fn test_disc_replaces_existing() {
        let board = BoardBuilder::new()
            .disc(Square::A1, Side::Black)
            .disc(Square::A1, Side::White)
            .build();
        assert_eq!(board.side_at(Square::A1), Some(Side::White));
        assert_eq!(board.disc_count(Side::Black), 0);
    }

    #[test]
    fn test_clear() {
        let board = BoardBuilder::starting_position()
            .clear(Square::new(3, 3).unwrap())
            .build();
        assert_eq!(board.disc_count(Side::White), 1);
        assert_eq!(board.empty_count(), 61);
    }
}
