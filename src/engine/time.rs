//! Per-move time budget for the supervisor.

use std::time::Duration;

/// Default thinking time per move
pub const DEFAULT_MOVE_TIME_MS: u64 = 1000;

/// Time the search gets to exit after the stop flag is raised
pub const DEFAULT_GRACE_MS: u64 = 100;

/// Maximum sleep between checks on the search thread
pub const DEFAULT_POLL_MS: u64 = 5;

/// Time budget for one supervised search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeConfig {
    /// Wall-clock time the search may think before it is told to stop
    pub move_time: Duration,
    /// How long to wait for the search to exit after the stop request
    pub grace_period: Duration,
    /// Upper bound on each sleep while waiting
    pub poll_interval: Duration,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            move_time: Duration::from_millis(DEFAULT_MOVE_TIME_MS),
            grace_period: Duration::from_millis(DEFAULT_GRACE_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl TimeConfig {
    /// Budget of `seconds` per move with the default grace period.
    /// Negative or non-finite values give a zero budget.
    #[must_use]
    pub fn from_secs(seconds: f64) -> Self {
        let move_time = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        TimeConfig {
            move_time,
            ..TimeConfig::default()
        }
    }

    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        TimeConfig {
            move_time: Duration::from_millis(ms),
            ..TimeConfig::default()
        }
    }
}
