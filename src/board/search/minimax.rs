//! Plain minimax without pruning.
//!
//! Visits every node to the given depth with the same move order, pass
//! handling and tie-break as the alpha-beta search. It exists to check that
//! pruning changes only the work done, never the move chosen.

use super::constants::MAXIMIZING_SIDE;
use super::SearchNode;
use crate::board::eval::{terminal_score, Evaluator};
use crate::board::{Board, Side};

/// Full-width minimax search of `board` with `side` to move.
#[must_use]
pub fn minimax(evaluator: &Evaluator, board: &Board, side: Side, depth: u32) -> SearchNode {
    if depth == 0 {
        return SearchNode::leaf(evaluator.evaluate(board));
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        let opponent = side.opponent();
        if board.has_any_move(opponent) {
            return SearchNode::leaf(minimax(evaluator, board, opponent, depth).score);
        }
        return SearchNode::leaf(terminal_score(board));
    }

    let maximizing = side == MAXIMIZING_SIDE;
    let mut best: Option<SearchNode> = None;
    for square in moves {
        let child = board.apply_unchecked(side, square);
        let score = match child.next_to_move(side) {
            Some(next) => minimax(evaluator, &child, next, depth - 1).score,
            None => terminal_score(&child),
        };
        let improves = best.map_or(true, |b| {
            if maximizing {
                score > b.score
            } else {
                score < b.score
            }
        });
        if improves {
            best = Some(SearchNode {
                score,
                best_move: Some(square),
            });
        }
    }

    best.unwrap_or(SearchNode::leaf(terminal_score(board)))
}
