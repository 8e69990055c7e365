use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::{Cell, Side, Square, FRAME_WIDTH};

/// Number of cells in the padded frame
pub const BOARD_CELLS: usize = FRAME_WIDTH * FRAME_WIDTH;

/// An 8x8 Othello board embedded in a 10x10 frame of `Cell::Outer`.
///
/// The border lets directional scans walk until they hit a non-matching cell
/// without any bounds checks. Boards are small `Copy` values; applying a move
/// produces a new board rather than mutating history.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// A board with the border in place and every playable cell empty.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [Cell::Outer; BOARD_CELLS];
        for square in Square::all() {
            cells[square.index()] = Cell::Empty;
        }
        Board { cells }
    }

    /// The standard starting position: `d4`/`e5` White, `e4`/`d5` Black.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.set(Square::at(3, 3), Cell::Disc(Side::White));
        board.set(Square::at(3, 4), Cell::Disc(Side::Black));
        board.set(Square::at(4, 3), Cell::Disc(Side::Black));
        board.set(Square::at(4, 4), Cell::Disc(Side::White));
        board
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_at(&self, square: Square) -> Option<Side> {
        self.cell(square).side()
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    #[must_use]
    pub fn disc_count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Disc(side)).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Net disc count, Black minus White
    #[must_use]
    pub fn disc_difference(&self) -> i32 {
        self.disc_count(Side::Black) as i32 - self.disc_count(Side::White) as i32
    }

    /// The same position with every disc's owner exchanged.
    #[must_use]
    pub fn swap_sides(&self) -> Board {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            if let Cell::Disc(side) = *cell {
                *cell = Cell::Disc(side.opponent());
            }
        }
        swapped
    }

    /// The 100-character padded text form (`?` border, `.` empty, `@`/`o` discs).
    #[must_use]
    pub fn to_text(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Eight labelled rows for diagnostics, row 1 first.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 20);
        for row in 0..8 {
            out.push(char::from(b'1' + row as u8));
            for col in 0..8 {
                out.push(' ');
                out.push(self.cell(Square::at(row, col)).to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.to_text()).finish()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(BoardParseError::InvalidLength { found: chars.len() });
        }

        let mut board = Board::empty();
        for (index, &ch) in chars.iter().enumerate() {
            let cell = Cell::from_char(ch)
                .ok_or(BoardParseError::InvalidCharacter { char: ch, index })?;
            let playable = Square::from_index(index);
            match (playable, cell) {
                (None, Cell::Outer) => {}
                (None, _) => return Err(BoardParseError::MissingBorder { index }),
                (Some(_), Cell::Outer) => {
                    return Err(BoardParseError::MisplacedBorder { index })
                }
                (Some(square), cell) => board.set(square, cell),
            }
        }
        Ok(board)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
