//! Engine controller implementation.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::time::TimeConfig;
use super::EngineError;
use crate::board::{Board, PublishedMove, SearchEngine, SearchResult, Side};
use crate::sync::{BestMoveSlot, StopFlag};

/// Search thread stack size (8 MB); recursion is bounded by the empty squares
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Cap on any wait, for budgets too large to add to an `Instant`
const MAX_WAIT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// `from + budget`, saturating at `MAX_WAIT` past `from`.
fn deadline_after(from: Instant, budget: Duration) -> Instant {
    from.checked_add(budget.min(MAX_WAIT))
        .or_else(|| from.checked_add(MAX_WAIT))
        .unwrap_or(from)
}

/// Runs one time-boxed search per turn on a dedicated thread.
///
/// The search communicates only through a [`BestMoveSlot`]. When the move
/// time runs out the controller raises the [`StopFlag`], gives the search a
/// grace period to exit, and answers with whatever was last published.
#[derive(Debug, Clone)]
pub struct EngineController {
    engine: SearchEngine,
    time: TimeConfig,
}

impl EngineController {
    #[must_use]
    pub fn new(engine: SearchEngine, time: TimeConfig) -> Self {
        EngineController { engine, time }
    }

    /// Sleep until `handle` finishes or `deadline` passes, in short steps.
    fn wait_until(&self, handle: &JoinHandle<SearchResult>, deadline: Instant) {
        loop {
            if handle.is_finished() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            let poll = self.time.poll_interval.max(Duration::from_millis(1));
            thread::sleep((deadline - now).min(poll));
        }
    }

    /// Think about `board` for `side` within the configured budget.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Spawn`] if the search thread cannot start and
    /// [`EngineError::NoMoveProduced`] if no iteration completed in time (or
    /// `side` has no legal move).
    pub fn think(&self, board: &Board, side: Side) -> Result<PublishedMove, EngineError> {
        let slot = BestMoveSlot::new();
        let stop = StopFlag::new();
        let start = Instant::now();

        let handle = {
            let engine = self.engine.clone();
            let board = *board;
            let slot = slot.clone();
            let stop = stop.clone();
            thread::Builder::new()
                .name("search".to_string())
                .stack_size(SEARCH_STACK_SIZE)
                .spawn(move || engine.select_move(&board, side, &slot, &stop))
                .map_err(EngineError::Spawn)?
        };

        self.wait_until(&handle, deadline_after(start, self.time.move_time));
        stop.stop();
        self.wait_until(&handle, deadline_after(Instant::now(), self.time.grace_period));

        if handle.is_finished() {
            match handle.join() {
                Ok(result) => log::debug!(
                    "{side} searched {} nodes, deepest depth {:?}, stopped: {:?}",
                    result.nodes,
                    result.best.map(|b| b.depth),
                    result.stop_reason
                ),
                Err(_) => log::error!("search thread for {side} panicked"),
            }
        } else {
            // The thread keeps running detached until it next polls the flag
            log::warn!(
                "search for {side} did not exit within {:?} of the stop request",
                self.time.grace_period
            );
        }

        let published = slot.take().ok_or(EngineError::NoMoveProduced { side })?;
        log::info!(
            "{side} plays {} (depth {}, score {}) after {:?}",
            published.square,
            published.depth,
            published.score,
            start.elapsed()
        );
        Ok(published)
    }
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new(SearchEngine::default(), TimeConfig::default())
    }
}
