//! Game driver: alternates turns between two players until nobody can move.
//!
//! # Example
//! ```
//! use othello_engine::game::{Game, RandomPlayer};
//!
//! let mut game = Game::new();
//! let summary = game
//!     .play(&mut RandomPlayer::new(1), &mut RandomPlayer::new(2))
//!     .unwrap();
//! assert!(game.is_over());
//! assert_eq!(summary.score, game.board().disc_difference());
//! ```

mod players;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, Square};
use crate::engine::EngineError;

pub use players::{EnginePlayer, FixedDepthPlayer, Player, RandomPlayer};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Win(Side),
    Tie,
}

impl Outcome {
    /// Outcome decided by the net disc count (Black minus White).
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Outcome::Win(Side::Black),
            -1 => Outcome::Win(Side::White),
            _ => Outcome::Tie,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side} wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// One move of the game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Side,
    pub square: Square,
    /// Discs flipped by the move
    pub flipped: usize,
}

/// Final state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Net disc count, Black minus White
    pub score: i32,
    pub outcome: Outcome,
    pub moves: usize,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Option<Side>,
    record: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position with Black to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::initial(), Side::Black)
    }

    /// Start from `board` with `side` to play. If `side` has no move the
    /// turn passes immediately; if nobody can move the game is already over.
    #[must_use]
    pub fn from_position(board: Board, side: Side) -> Self {
        Game {
            board,
            to_move: board.next_to_move(side.opponent()),
            record: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to play, or `None` once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Side> {
        self.to_move
    }

    #[must_use]
    pub fn record(&self) -> &[PlayedMove] {
        &self.record
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.to_move.is_none()
    }

    /// Net disc count of the current position.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.board.disc_difference()
    }

    /// Ask `player` for a move for the side to play and apply it.
    ///
    /// Returns `Ok(None)` if the game is already over.
    ///
    /// # Errors
    ///
    /// Propagates the player's error, or [`EngineError::IllegalMove`] if the
    /// chosen square is not legal. The game state is unchanged on error.
    pub fn play_turn<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<Option<PlayedMove>, EngineError> {
        let Some(side) = self.to_move else {
            return Ok(None);
        };

        let square = player.choose_move(&self.board, side)?;
        let flipped = self.board.flips(side, square);
        self.board = self.board.apply(side, square)?;

        let played = PlayedMove {
            side,
            square,
            flipped,
        };
        self.record.push(played);
        log::info!("{side} ({}) plays {square}, flipping {flipped}", player.name());

        self.to_move = self.board.next_to_move(side);
        match self.to_move {
            Some(next) if next == side => log::info!("{} has no move and passes", side.opponent()),
            None => log::info!("game over: {}", self.summary().outcome),
            _ => {}
        }
        Ok(Some(played))
    }

    /// Play to the end, `black` and `white` choosing moves in turn.
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`Game::play_turn`].
    pub fn play(
        &mut self,
        black: &mut dyn Player,
        white: &mut dyn Player,
    ) -> Result<GameSummary, EngineError> {
        while let Some(side) = self.to_move {
            let player: &mut dyn Player = match side {
                Side::Black => &mut *black,
                Side::White => &mut *white,
            };
            self.play_turn(player)?;
        }
        Ok(self.summary())
    }

    /// Score and outcome of the current position.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let score = self.score();
        GameSummary {
            score,
            outcome: Outcome::from_score(score),
            moves: self.record.len(),
        }
    }
}
