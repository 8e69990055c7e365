use super::constants::NODE_CHECK_INTERVAL;

/// Iterative deepening schedule and cancellation polling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// First depth searched
    pub start_depth: u32,
    /// Depth added after each completed iteration
    pub depth_step: u32,
    /// Deepest iteration allowed (None = until cancelled or converged)
    pub max_depth: Option<u32>,
    /// Nodes between polls of the stop flag inside an iteration
    pub node_check_interval: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            start_depth: 1,
            depth_step: 2,
            max_depth: None,
            node_check_interval: NODE_CHECK_INTERVAL,
        }
    }
}

impl SearchParams {
    /// Parameters for a search that never goes deeper than `depth`.
    #[must_use]
    pub fn with_max_depth(depth: u32) -> Self {
        SearchParams {
            max_depth: Some(depth),
            ..SearchParams::default()
        }
    }
}
