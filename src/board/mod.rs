//! Othello board representation and game logic.
//!
//! The 8x8 board lives inside a 10x10 frame of border cells so directional
//! scans never need bounds checks. Boards are `Copy` values: applying a move
//! returns a new board.
//!
//! # Example
//! ```
//! use othello_engine::board::{Board, Side};
//!
//! let board = Board::initial();
//! let moves = board.legal_moves(Side::Black);
//! println!("Black has {} opening moves", moves.len());
//! let next = board.apply(Side::Black, moves[0]).unwrap();
//! assert_eq!(next.next_to_move(Side::Black), Some(Side::White));
//! ```

mod builder;
mod error;
mod eval;
mod eval_terms;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardParseError, IllegalMove, SquareError};
pub use state::{Board, BOARD_CELLS};
pub use types::{Cell, Direction, MoveList, MoveListIntoIter, Side, Square};

// Public API - evaluation
pub use eval::{terminal_score, EvalBreakdown, EvalWeights, Evaluator, Score, WIN_SCORE};
pub use eval_terms::normalized;

// Public API - search functions and configuration
pub use search::{
    minimax, PublishedMove, SearchEngine, SearchInfo, SearchInfoCallback, SearchNode,
    SearchParams, SearchResult, StopReason, INFINITY, MAXIMIZING_SIDE, NODE_CHECK_INTERVAL,
};

pub(crate) use types::FRAME_WIDTH;
