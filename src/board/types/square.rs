//! Square and direction types for the padded board frame.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::board::error::SquareError;

/// Width of the padded frame (8 playable columns plus one border cell each side)
pub(crate) const FRAME_WIDTH: usize = 10;

/// All 64 playable squares in ascending index order.
static SQUARES: Lazy<Vec<Square>> = Lazy::new(|| {
    (0..8)
        .flat_map(|row| (0..8).map(move |col| Square::at(row, col)))
        .collect()
});

/// A playable square, stored as its index in the padded 10x10 frame.
///
/// Row `r` and column `c` (both 0-7) map to `10 * (r + 1) + (c + 1)`, so
/// `a1` is 11 and `h8` is 88. Squares order by that index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(11);
    pub const H1: Square = Square(18);
    pub const A8: Square = Square(81);
    pub const H8: Square = Square(88);

    /// The four corners, in index order
    pub const CORNERS: [Square; 4] = [Square::A1, Square::H1, Square::A8, Square::H8];

    /// Create a square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square::at(row, col))
        } else {
            None
        }
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Square((FRAME_WIDTH * (row + 1) + col + 1) as u8)
    }

    /// Create a square from a padded frame index; border indices are rejected
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let (row, col) = (index / FRAME_WIDTH, index % FRAME_WIDTH);
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Index into the padded frame (11-88)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7 (0 = row 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / FRAME_WIDTH - 1
    }

    /// Column 0-7 (0 = column a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % FRAME_WIDTH - 1
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        Square::CORNERS.contains(&self)
    }

    /// Iterate over all playable squares in ascending index order
    pub fn all() -> impl Iterator<Item = Square> {
        SQUARES.iter().copied()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Square::from_index(usize::from(index)).ok_or_else(|| {
            serde::de::Error::custom(format!("{index} is not a playable square index"))
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() as u8 + b'a') as char, self.row() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&col) || !('1'..='8').contains(&row) {
            return Err(invalid());
        }
        let col = col as usize - 'a' as usize;
        let row = row as usize - '1' as usize;
        Ok(Square::at(row, col))
    }
}

/// One of the eight compass offsets in the padded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction(i8);

impl Direction {
    pub const N: Direction = Direction(-10);
    pub const S: Direction = Direction(10);
    pub const E: Direction = Direction(1);
    pub const W: Direction = Direction(-1);
    pub const NE: Direction = Direction(-9);
    pub const SE: Direction = Direction(11);
    pub const NW: Direction = Direction(-11);
    pub const SW: Direction = Direction(9);

    /// All eight directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// One direction per line through a square; pair each with its `opposite`
    pub const AXES: [Direction; 4] = [Direction::E, Direction::S, Direction::SE, Direction::SW];

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Direction {
        Direction(-self.0)
    }

    /// Step one cell from `index`. Callers only step from playable cells, so
    /// the result stays inside the frame.
    #[inline]
    #[must_use]
    pub(crate) const fn step(self, index: usize) -> usize {
        (index as isize + self.0 as isize) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_index_layout() {
        assert_eq!(Square::new(0, 0), Some(Square::A1));
        assert_eq!(Square::new(7, 7), Some(Square::H8));
        assert_eq!(Square::new(2, 3).map(Square::index), Some(34));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn from_index_rejects_border() {
        assert_eq!(Square::from_index(34), Square::new(2, 3));
        for border in [0, 9, 10, 19, 20, 89, 90, 99, 100] {
            assert_eq!(Square::from_index(border), None, "index {border}");
        }
    }

    #[test]
    fn all_squares_ascending() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
    }

    #[test]
    fn algebraic_notation() {
        let d3: Square = "d3".parse().unwrap();
        assert_eq!(d3.index(), 34);
        assert_eq!(d3.to_string(), "d3");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn try_from_reports_bad_coordinate() {
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::RowOutOfBounds { row: 9 })
        );
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::ColumnOutOfBounds { col: 8 })
        );
    }

    #[test]
    fn axes_cover_all_directions() {
        for axis in Direction::AXES {
            assert!(Direction::ALL.contains(&axis));
            assert!(Direction::ALL.contains(&axis.opposite()));
        }
    }
}
