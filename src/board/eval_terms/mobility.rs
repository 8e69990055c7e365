//! Mobility evaluation.
//!
//! Actual mobility counts legal moves now; potential mobility counts empty
//! squares next to opponent discs, a proxy for moves that may open up later.

use crate::board::state::Board;
use crate::board::types::{Cell, Direction, Side, Square};

use super::normalized;

impl Board {
    /// Empty squares adjacent to at least one disc of `side`'s opponent.
    #[must_use]
    pub fn potential_moves(&self, side: Side) -> usize {
        let opponent = Cell::Disc(side.opponent());
        Square::all()
            .filter(|&sq| self.cell(sq) == Cell::Empty)
            .filter(|sq| {
                Direction::ALL
                    .iter()
                    .any(|dir| self.cells[dir.step(sq.index())] == opponent)
            })
            .count()
    }

    /// Evaluate mobility.
    /// Returns `(actual, potential)`, each on a -100..=100 scale from Black's perspective.
    #[must_use]
    pub fn eval_mobility(&self) -> (i32, i32) {
        let actual = normalized(
            self.legal_moves(Side::Black).len() as i32,
            self.legal_moves(Side::White).len() as i32,
        );
        let potential = normalized(
            self.potential_moves(Side::Black) as i32,
            self.potential_moves(Side::White) as i32,
        );
        (actual, potential)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Side, Square};

    #[test]
    fn startpos_mobility_is_balanced() {
        assert_eq!(Board::initial().eval_mobility(), (0, 0));
    }

    #[test]
    fn potential_counts_distinct_squares() {
        // Lone white disc in a corner: three empty neighbours, all Black's potential
        let board = BoardBuilder::new().disc(Square::A1, Side::White).build();
        assert_eq!(board.potential_moves(Side::Black), 3);
        assert_eq!(board.potential_moves(Side::White), 0);
        assert_eq!(board.eval_mobility(), (0, 100));
    }
}
