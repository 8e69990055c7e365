//! Time-boxed engine supervision.
//!
//! [`EngineController`] runs one iterative-deepening search per turn on its
//! own thread and answers with the last move the search published before the
//! deadline.

mod controller;
pub mod time;

use std::fmt;
use std::io;

use crate::board::{IllegalMove, Side};

pub use controller::EngineController;
pub use time::TimeConfig;

/// Errors raised while producing or applying a move.
#[derive(Debug)]
pub enum EngineError {
    /// The search published nothing before the deadline
    NoMoveProduced { side: Side },
    /// The search thread could not be started
    Spawn(io::Error),
    /// A player answered with a square that is not legal
    IllegalMove(IllegalMove),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoMoveProduced { side } => {
                write!(f, "no move was produced for {side} before the deadline")
            }
            EngineError::Spawn(err) => write!(f, "failed to start search thread: {err}"),
            EngineError::IllegalMove(err) => write!(f, "illegal move: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Spawn(err) => Some(err),
            EngineError::IllegalMove(err) => Some(err),
            EngineError::NoMoveProduced { .. } => None,
        }
    }
}

impl From<IllegalMove> for EngineError {
    fn from(err: IllegalMove) -> Self {
        EngineError::IllegalMove(err)
    }
}
