//! Core search implementation.
//!
//! This module implements:
//! - Depth-limited minimax with alpha-beta pruning
//! - Forced passes and terminal scoring
//! - Iterative deepening over odd depths with cooperative cancellation
//!
//! Moves are searched in ascending square order and a child only replaces
//! the current best on a strictly better score, so among equal scores the
//! lowest-index move wins. Pruning never changes which move that is: a
//! later sibling is only accepted when its score is strictly inside the
//! window, where alpha-beta scores are exact.

mod iterative;

use std::sync::atomic::{AtomicBool, Ordering};

use super::constants::{INFINITY, MAXIMIZING_SIDE};
use super::SearchNode;
use crate::board::eval::{terminal_score, Evaluator, Score};
use crate::board::{Board, Side};

/// Search context for one depth iteration
pub(crate) struct SimpleSearchContext<'a> {
    pub evaluator: &'a Evaluator,
    pub stop: &'a AtomicBool,
    pub check_interval: u64,
    pub nodes: u64,
    /// Set once the stop flag is seen; the iteration's result is then void
    pub aborted: bool,
}

impl<'a> SimpleSearchContext<'a> {
    pub fn new(evaluator: &'a Evaluator, stop: &'a AtomicBool, check_interval: u64) -> Self {
        SimpleSearchContext {
            evaluator,
            stop,
            check_interval: check_interval.max(1),
            nodes: 0,
            aborted: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if !self.aborted
            && self.nodes % self.check_interval == 0
            && self.stop.load(Ordering::Relaxed)
        {
            self.aborted = true;
        }
        self.aborted
    }

    /// Alpha-beta search of `board` with `side` to move.
    ///
    /// Returns the node's score and the move that produced it. The move is
    /// `None` at leaves, at terminal positions, and where `side` had to pass.
    pub fn alphabeta(
        &mut self,
        board: &Board,
        side: Side,
        mut alpha: Score,
        mut beta: Score,
        depth: u32,
    ) -> SearchNode {
        self.nodes += 1;
        if self.should_stop() {
            return SearchNode::leaf(0);
        }

        if depth == 0 {
            return SearchNode::leaf(self.evaluator.evaluate(board));
        }

        let moves = board.legal_moves(side);
        if moves.is_empty() {
            let opponent = side.opponent();
            if board.has_any_move(opponent) {
                let reply = self.alphabeta(board, opponent, alpha, beta, depth);
                return SearchNode::leaf(reply.score);
            }
            return SearchNode::leaf(terminal_score(board));
        }

        let maximizing = side == MAXIMIZING_SIDE;
        let mut best = SearchNode {
            score: if maximizing { -INFINITY } else { INFINITY },
            best_move: None,
        };

        for square in moves {
            let child = board.apply_unchecked(side, square);
            let score = match child.next_to_move(side) {
                Some(next) => self.alphabeta(&child, next, alpha, beta, depth - 1).score,
                None => terminal_score(&child),
            };
            if self.aborted {
                return SearchNode::leaf(0);
            }

            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchNode {
                    score,
                    best_move: Some(square),
                };
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
