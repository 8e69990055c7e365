//! Side and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two players. Black moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides in move order
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Disc character used in the text form (`@` for Black, `o` for White)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::Black => '@',
            Side::White => 'o',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            '@' => Some(Side::Black),
            'o' => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Content of one cell of the padded 10x10 frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Side),
    /// Sentinel border cell, never playable
    Outer,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Disc(side) => side.to_char(),
            Cell::Outer => '?',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            '?' => Some(Cell::Outer),
            other => Side::from_char(other).map(Cell::Disc),
        }
    }

    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Disc(side) => Some(side),
            _ => None,
        }
    }
}
