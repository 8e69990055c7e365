//! Disc stability heuristic.
//!
//! A disc is treated as stable when, on each of its four lines, the run of
//! same-side discs through it either reaches the border or is closed by
//! non-empty cells on both ends, so no empty flanking cell lets the opponent
//! bracket it along that line. This is an estimate: it ignores runs that
//! could change after later flips, and may over- or under-count.
//!
//! Stability is recomputed from the board on every call.

use crate::board::state::Board;
use crate::board::types::{Cell, Direction, Side, Square};

use super::normalized;

impl Board {
    /// First cell past the run of `side` discs starting next to `from`.
    fn run_end(&self, side: Side, from: usize, dir: Direction) -> Cell {
        let own = Cell::Disc(side);
        let mut idx = dir.step(from);
        while self.cells[idx] == own {
            idx = dir.step(idx);
        }
        self.cells[idx]
    }

    /// Whether the disc on `square` is judged unflippable. Empty squares are
    /// never stable.
    #[must_use]
    pub fn is_stable(&self, square: Square) -> bool {
        let Some(side) = self.side_at(square) else {
            return false;
        };
        Direction::AXES.iter().all(|&axis| {
            let ahead = self.run_end(side, square.index(), axis);
            let behind = self.run_end(side, square.index(), axis.opposite());
            ahead == Cell::Outer
                || behind == Cell::Outer
                || (ahead != Cell::Empty && behind != Cell::Empty)
        })
    }

    /// Number of stable discs for `side`.
    #[must_use]
    pub fn stable_count(&self, side: Side) -> usize {
        Square::all()
            .filter(|&sq| self.side_at(sq) == Some(side) && self.is_stable(sq))
            .count()
    }

    /// Stability on a -100..=100 scale from Black's perspective.
    #[must_use]
    pub fn eval_stability(&self) -> i32 {
        normalized(
            self.stable_count(Side::Black) as i32,
            self.stable_count(Side::White) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Side, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn corner_disc_is_stable() {
        let board = BoardBuilder::new().disc(Square::A1, Side::Black).build();
        assert!(board.is_stable(Square::A1));
        assert_eq!(board.eval_stability(), 100);
    }

    #[test]
    fn lone_edge_disc_is_not_stable() {
        let board = BoardBuilder::new().disc(sq("b1"), Side::Black).build();
        assert!(!board.is_stable(sq("b1")));
    }

    #[test]
    fn edge_run_anchored_in_corner_is_stable() {
        let board = BoardBuilder::new()
            .discs(&[Square::A1, sq("b1"), sq("c1")], Side::White)
            .build();
        // Every line through these discs touches the border on one end
        assert_eq!(board.stable_count(Side::White), 3);
        assert_eq!(board.eval_stability(), -100);
    }

    #[test]
    fn startpos_has_no_stable_discs() {
        let board = Board::initial();
        assert_eq!(board.stable_count(Side::Black), 0);
        assert_eq!(board.stable_count(Side::White), 0);
        assert_eq!(board.eval_stability(), 0);
    }

    #[test]
    fn empty_square_is_never_stable() {
        assert!(!Board::empty().is_stable(sq("d4")));
    }
}
