//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use othello_engine::board::prelude::*;
//!
//! let engine = SearchEngine::default();
//! assert!(engine.best_move(&Board::initial(), Side::Black, 1).is_some());
//! ```

pub use super::{
    Board, BoardBuilder, Cell, IllegalMove, MoveList, PublishedMove, SearchEngine, SearchParams,
    Side, Square,
};
