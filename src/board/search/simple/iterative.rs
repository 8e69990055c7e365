use std::time::Instant;

use super::SimpleSearchContext;
use crate::board::search::constants::INFINITY;
use crate::board::search::{PublishedMove, SearchEngine, SearchInfo, SearchResult, StopReason};
use crate::board::{Board, Side};
use crate::sync::{BestMoveSlot, StopFlag};

impl SearchEngine {
    /// Iterative deepening move selection, the per-turn entry point.
    ///
    /// Searches depths `start_depth`, `start_depth + depth_step`, ... with a
    /// fresh full window each time. After every completed iteration the
    /// result is published to `slot` in one write, so a supervisor can read
    /// the best move at any moment. `stop` is checked between iterations and
    /// polled inside them; an interrupted iteration publishes nothing and the
    /// last completed depth stands.
    ///
    /// Without a stop request the loop ends only when the depth covers every
    /// empty square (deeper searches cannot change the answer) or when the
    /// next depth would exceed `max_depth`.
    pub fn select_move(
        &self,
        board: &Board,
        side: Side,
        slot: &BestMoveSlot,
        stop: &StopFlag,
    ) -> SearchResult {
        let start = Instant::now();
        let mut result = SearchResult::new(StopReason::NoLegalMove);

        if !board.has_any_move(side) {
            log::debug!("{side} has no legal move; nothing to search");
            return result;
        }

        let empties = board.empty_count() as u32;
        let step = self.params.depth_step.max(1);
        let mut depth = self.params.start_depth.max(1);

        loop {
            if stop.is_stopped() {
                result.stop_reason = StopReason::Cancelled;
                break;
            }

            let mut ctx = SimpleSearchContext::new(
                &self.evaluator,
                stop.as_atomic(),
                self.params.node_check_interval,
            );
            let node = ctx.alphabeta(board, side, -INFINITY, INFINITY, depth);
            result.nodes += ctx.nodes;

            if ctx.aborted {
                log::debug!("depth {depth} interrupted after {} nodes", ctx.nodes);
                result.stop_reason = StopReason::Cancelled;
                break;
            }

            if let Some(square) = node.best_move {
                let published = PublishedMove {
                    square,
                    depth,
                    score: node.score,
                };
                slot.publish(published);
                result.best = Some(published);
            }

            let info = SearchInfo {
                depth,
                score: node.score,
                best_move: node.best_move,
                nodes: ctx.nodes,
                elapsed: start.elapsed(),
            };
            log::debug!(
                "depth {} score {} move {} nodes {} time {:?}",
                info.depth,
                info.score,
                info.best_move.map_or_else(|| "-".to_string(), |sq| sq.to_string()),
                info.nodes,
                info.elapsed
            );
            if let Some(cb) = &self.info_callback {
                cb(&info);
            }
            result.iterations.push(info);

            if depth >= empties {
                result.stop_reason = StopReason::Converged;
                break;
            }
            if self.params.max_depth.is_some_and(|max| depth + step > max) {
                result.stop_reason = StopReason::DepthLimit;
                break;
            }
            depth += step;
        }

        result
    }
}
