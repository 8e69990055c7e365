//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal moves, flipping, passing and game end
//! - `eval.rs` - Evaluator terms on hand-built positions
//! - `search.rs` - Alpha-beta, minimax and iterative deepening
//! - `proptest.rs` - Property-based tests over random playouts

mod eval;
mod proptest;

use crate::board::{Board, Side, Square};

/// Parse algebraic squares, panicking on bad input.
pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|name| name.parse().unwrap()).collect()
}

/// Play `moves` from the start position, alternating sides with passes.
pub(super) fn play_from_start(moves: &[&str]) -> (Board, Option<Side>) {
    let mut board = Board::initial();
    let mut side = Some(Side::Black);
    for square in squares(moves) {
        let mover = side.expect("game ended before the move list did");
        board = board.apply(mover, square).unwrap();
        side = board.next_to_move(mover);
    }
    (board, side)
}
