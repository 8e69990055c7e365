//! Othello engine: board rules, a weighted evaluator, alpha-beta search with
//! iterative deepening, a time-boxed supervisor and a game driver.

pub mod board;
pub mod engine;
pub mod game;
pub mod sync;

pub use board::{Board, PublishedMove, SearchEngine, Side, Square};
pub use engine::{EngineController, EngineError, TimeConfig};
pub use game::{Game, Outcome};
pub use sync::{BestMoveSlot, StopFlag};
