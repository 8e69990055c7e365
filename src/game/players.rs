//! Move sources for the game driver.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, SearchEngine, Side, Square};
use crate::engine::{EngineController, EngineError};

/// Anything that can pick a move for the side to play.
///
/// The driver only asks a player to move when `side` has at least one legal
/// move; the answer is still checked before it is applied.
pub trait Player {
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns an [`EngineError`] when no move could be produced.
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<Square, EngineError>;
}

/// Time-boxed iterative deepening through an [`EngineController`].
#[derive(Debug, Clone, Default)]
pub struct EnginePlayer {
    controller: EngineController,
}

impl EnginePlayer {
    #[must_use]
    pub fn new(controller: EngineController) -> Self {
        EnginePlayer { controller }
    }
}

impl Player for EnginePlayer {
    fn name(&self) -> &str {
        "engine"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<Square, EngineError> {
        self.controller.think(board, side).map(|published| published.square)
    }
}

/// Alpha-beta to a fixed depth with no clock.
#[derive(Debug, Clone)]
pub struct FixedDepthPlayer {
    engine: SearchEngine,
    depth: u32,
}

impl FixedDepthPlayer {
    #[must_use]
    pub fn new(engine: SearchEngine, depth: u32) -> Self {
        FixedDepthPlayer {
            engine,
            depth: depth.max(1),
        }
    }
}

impl Player for FixedDepthPlayer {
    fn name(&self) -> &str {
        "depth"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<Square, EngineError> {
        self.engine
            .best_move(board, side, self.depth)
            .ok_or(EngineError::NoMoveProduced { side })
    }
}

/// Uniformly random legal moves from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<Square, EngineError> {
        board
            .legal_moves(side)
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoMoveProduced { side })
    }
}
