//! Static square-weight evaluation.

use crate::board::state::Board;
use crate::board::types::{Cell, Side};

use super::tables::POSITION_WEIGHTS;

impl Board {
    /// Sum of square weights under Black's discs minus White's.
    #[must_use]
    pub fn eval_positional(&self) -> i32 {
        self.cells
            .iter()
            .zip(POSITION_WEIGHTS.iter())
            .map(|(cell, &weight)| match cell {
                Cell::Disc(Side::Black) => weight,
                Cell::Disc(Side::White) => -weight,
                _ => 0,
            })
            .sum()
    }
}
