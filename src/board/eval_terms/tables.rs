//! Evaluation constants and tables.

use crate::board::state::BOARD_CELLS;

/// Static square weights over the padded frame (border cells are 0).
///
/// Corners and edges are valuable, the squares that give up a corner
/// (X- and C-squares) are penalized, the centre is mildly positive.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; BOARD_CELLS] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  6, -3,  2,  2,  2,  2, -3,  6, 0,
    0, -3, -4, -1, -1, -1, -1, -4, -3, 0,
    0,  2, -1,  1,  0,  0,  1, -1,  2, 0,
    0,  2, -1,  0,  1,  1,  0, -1,  2, 0,
    0,  2, -1,  0,  1,  1,  0, -1,  2, 0,
    0,  2, -1,  1,  0,  0,  1, -1,  2, 0,
    0, -3, -4, -1, -1, -1, -1, -4, -3, 0,
    0,  6, -3,  2,  2,  2,  2, -3,  6, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

/// Points for a side holding a corner
pub const CORNER_HELD: i32 = 3;

/// Points for a side that is the only candidate to take an empty corner
pub const CORNER_POTENTIAL: i32 = 1;

/// Mobility blend, in tenths: 0.7 actual + 0.3 potential
pub const ACTUAL_MOBILITY_TENTHS: i32 = 7;
pub const POTENTIAL_MOBILITY_TENTHS: i32 = 3;
