//! Corner control.
//!
//! Held corners score `CORNER_HELD`. An empty corner whose occupied
//! neighbours all belong to one side can only be taken by the other side,
//! which scores `CORNER_POTENTIAL` for it.

use once_cell::sync::Lazy;

use crate::board::state::Board;
use crate::board::types::{Cell, Direction, Side, Square};

use super::{normalized, tables::CORNER_HELD, tables::CORNER_POTENTIAL};

/// Each corner with its three on-board neighbours.
static CORNER_NEIGHBORS: Lazy<Vec<(Square, Vec<Square>)>> = Lazy::new(|| {
    Square::CORNERS
        .iter()
        .map(|&corner| {
            let neighbors = Direction::ALL
                .iter()
                .filter_map(|dir| Square::from_index(dir.step(corner.index())))
                .collect();
            (corner, neighbors)
        })
        .collect()
});

impl Board {
    /// The only side that could later occupy an empty `corner`, judged from
    /// its neighbours: if every occupied neighbour is the same side, the
    /// opponent of that side is the candidate.
    fn corner_candidate(&self, neighbors: &[Square]) -> Option<Side> {
        let mut owner = None;
        for &sq in neighbors {
            match (self.side_at(sq), owner) {
                (None, _) => {}
                (Some(side), None) => owner = Some(side),
                (Some(side), Some(seen)) if side != seen => return None,
                (Some(_), Some(_)) => {}
            }
        }
        owner.map(Side::opponent)
    }

    /// Corner control on a -100..=100 scale from Black's perspective.
    #[must_use]
    pub fn eval_corners(&self) -> i32 {
        let mut points = [0i32; 2];
        for (corner, neighbors) in CORNER_NEIGHBORS.iter() {
            match self.cell(*corner) {
                Cell::Disc(side) => points[side.index()] += CORNER_HELD,
                Cell::Empty => {
                    if let Some(side) = self.corner_candidate(neighbors) {
                        points[side.index()] += CORNER_POTENTIAL;
                    }
                }
                Cell::Outer => {}
            }
        }
        normalized(points[Side::Black.index()], points[Side::White.index()])
    }
}
