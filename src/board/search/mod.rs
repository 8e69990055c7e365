//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Minimax with alpha-beta pruning over legal moves in square order
//! - Forced passes, with terminal positions scored by outcome
//! - Iterative deepening over odd depths (1, 3, 5, ...)
//! - Cooperative cancellation through a stop flag, with the best move of the
//!   last completed depth published to a shared slot
//! - An un-pruned minimax reference search

mod constants;
mod minimax;
mod params;
mod simple;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::{EvalWeights, Evaluator, Score};
use super::{Board, Side, Square};
use simple::SimpleSearchContext;

pub use constants::{INFINITY, MAXIMIZING_SIDE, NODE_CHECK_INTERVAL};
pub use minimax::minimax;
pub use params::SearchParams;

/// Outcome of searching one node: its score and, for nodes where a move was
/// chosen, that move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub score: Score,
    pub best_move: Option<Square>,
}

impl SearchNode {
    #[inline]
    pub(crate) const fn leaf(score: Score) -> Self {
        SearchNode {
            score,
            best_move: None,
        }
    }
}

/// A fully formed search answer, published as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublishedMove {
    pub square: Square,
    /// Depth of the completed iteration that produced the move
    pub depth: u32,
    pub score: Score,
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: Score,
    pub best_move: Option<Square>,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Callback invoked after each completed iteration
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

/// Why iterative deepening stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The side to move had no legal move
    NoLegalMove,
    /// The stop flag was raised
    Cancelled,
    /// The search already reached the end of the game on every line
    Converged,
    /// `max_depth` was reached
    DepthLimit,
}

/// Result of a move selection.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move of the deepest completed iteration
    pub best: Option<PublishedMove>,
    pub iterations: Vec<SearchInfo>,
    pub nodes: u64,
    pub stop_reason: StopReason,
}

impl SearchResult {
    fn new(stop_reason: StopReason) -> Self {
        SearchResult {
            best: None,
            iterations: Vec::new(),
            nodes: 0,
            stop_reason,
        }
    }
}

/// Alpha-beta search engine: an evaluator plus the deepening schedule.
#[derive(Clone, Default)]
pub struct SearchEngine {
    evaluator: Evaluator,
    params: SearchParams,
    info_callback: Option<SearchInfoCallback>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(weights: EvalWeights, params: SearchParams) -> Self {
        SearchEngine {
            evaluator: Evaluator::new(weights),
            params,
            info_callback: None,
        }
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        SearchEngine::new(EvalWeights::default(), params)
    }

    /// Set a callback for per-iteration search info
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Single alpha-beta search to a fixed depth with a full window.
    #[must_use]
    pub fn search(&self, board: &Board, side: Side, depth: u32) -> SearchNode {
        let never = AtomicBool::new(false);
        let mut ctx = SimpleSearchContext::new(&self.evaluator, &never, u64::MAX);
        ctx.alphabeta(board, side, -INFINITY, INFINITY, depth)
    }

    /// Best move for `side` at a fixed depth, or `None` if it must pass.
    #[must_use]
    pub fn best_move(&self, board: &Board, side: Side, depth: u32) -> Option<Square> {
        self.search(board, side, depth).best_move
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("evaluator", &self.evaluator)
            .field("params", &self.params)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}
