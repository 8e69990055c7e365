//! Position evaluation.
//!
//! Two scorers, kept separate:
//! - [`Evaluator::evaluate`] blends the heuristic terms for non-final positions;
//! - [`terminal_score`] scores a finished game by its disc count.
//!
//! Both are from Black's perspective: positive favours Black.

use super::eval_terms::tables::{ACTUAL_MOBILITY_TENTHS, POTENTIAL_MOBILITY_TENTHS};
use super::Board;

/// Search and evaluation score
pub type Score = i32;

/// Base score of a won final position; far above any heuristic value
pub const WIN_SCORE: Score = 10_000_000;

/// Weights of the four heuristic terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    pub positional: i32,
    pub corners: i32,
    pub mobility: i32,
    pub stability: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            positional: 10,
            corners: 30,
            mobility: 5,
            stability: 25,
        }
    }
}

/// The individual heuristic terms of one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    pub positional: i32,
    pub corners: i32,
    pub actual_mobility: i32,
    pub potential_mobility: i32,
    pub stability: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let (actual_mobility, potential_mobility) = board.eval_mobility();
        EvalBreakdown {
            positional: board.eval_positional(),
            corners: board.eval_corners(),
            actual_mobility,
            potential_mobility,
            stability: board.eval_stability(),
        }
    }

    /// Weighted sum, in tenths so the 0.7/0.3 mobility blend stays exact.
    #[must_use]
    pub fn total(&self, weights: &EvalWeights) -> Score {
        let mobility = ACTUAL_MOBILITY_TENTHS * self.actual_mobility
            + POTENTIAL_MOBILITY_TENTHS * self.potential_mobility;
        10 * (weights.positional * self.positional
            + weights.corners * self.corners
            + weights.stability * self.stability)
            + weights.mobility * mobility
    }
}

/// Heuristic evaluator for positions where the game is still running.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Evaluator { weights }
    }

    /// Composite heuristic score of `board`.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> Score {
        EvalBreakdown::of(board).total(&self.weights)
    }
}

/// Score of a position where neither side can move: a win or loss signal
/// that dominates every heuristic score, plus the disc margin. A tie is 0.
#[must_use]
pub fn terminal_score(board: &Board) -> Score {
    let diff = board.disc_difference();
    diff.signum() * WIN_SCORE + diff
}
