//! Signals shared between a running search and its supervisor.
//!
//! - [`StopFlag`]: written by the supervisor, read by the search.
//! - [`BestMoveSlot`]: written by the search, read by the supervisor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::PublishedMove;

/// A thread-safe stop flag for controlling search termination.
///
/// This wraps `Arc<AtomicBool>`; clones share the same flag.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a stop flag that is already set.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// The underlying flag, for the search's inner polling loop.
    #[inline]
    #[must_use]
    pub fn as_atomic(&self) -> &AtomicBool {
        &self.0
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The single output channel of a search: the latest fully formed answer.
///
/// A publish replaces the whole `PublishedMove` under a lock, so a reader
/// never observes a move from one iteration paired with the depth or score
/// of another. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct BestMoveSlot(Arc<Mutex<Option<PublishedMove>>>);

impl BestMoveSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, published: PublishedMove) {
        *self.0.lock() = Some(published);
    }

    /// The most recent answer, if any was published.
    #[must_use]
    pub fn get(&self) -> Option<PublishedMove> {
        *self.0.lock()
    }

    /// Remove and return the most recent answer.
    pub fn take(&self) -> Option<PublishedMove> {
        self.0.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_stop_flag_lifecycle() {
        let flag = StopFlag::new();
        assert!(!flag.is_stopped());

        flag.stop();
        assert!(flag.is_stopped());

        flag.reset();
        assert!(!flag.is_stopped());
    }

    #[test]
    fn test_stop_flag_clone() {
        let flag1 = StopFlag::new();
        let flag2 = flag1.clone();

        flag1.stop();
        assert!(flag2.is_stopped());
    }

    #[test]
    fn test_stop_flag_stopped() {
        let flag = StopFlag::stopped();
        assert!(flag.is_stopped());
    }

    #[test]
    fn test_slot_keeps_latest_publish() {
        let slot = BestMoveSlot::new();
        assert_eq!(slot.get(), None);

        let first = PublishedMove {
            square: Square::A1,
            depth: 1,
            score: 10,
        };
        let second = PublishedMove {
            square: Square::H8,
            depth: 3,
            score: -4,
        };
        slot.publish(first);
        slot.clone().publish(second);

        assert_eq!(slot.get(), Some(second));
        assert_eq!(slot.take(), Some(second));
        assert_eq!(slot.get(), None);
    }
}
