//! Search constants.

use crate::board::eval::Score;
use crate::board::Side;

/// Bound used for the initial alpha-beta window; above every reachable score
pub const INFINITY: Score = 1_000_000_000;

/// The side whose score the search maximizes; evaluation is from its view
pub const MAXIMIZING_SIDE: Side = Side::Black;

/// Default number of nodes between polls of the stop flag
pub const NODE_CHECK_INTERVAL: u64 = 1024;
