//! Error types for board operations.

use std::fmt;

use super::{Board, Side, Square};

/// A move was applied that is not in the mover's legal-move set.
///
/// This is a caller error: legality must be checked before applying. The
/// offending side, square and board are carried for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    pub side: Side,
    pub square: Square,
    pub board: Board,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cannot move to square {} (index {})",
            self.side,
            self.square,
            self.square.index()
        )
    }
}

impl std::error::Error for IllegalMove {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for failures parsing the 100-character board text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Text form must be exactly 100 characters
    InvalidLength { found: usize },
    /// Character is not one of `?`, `.`, `@`, `o`
    InvalidCharacter { char: char, index: usize },
    /// A border cell is not `?`
    MissingBorder { index: usize },
    /// A playable cell holds the border marker
    MisplacedBorder { index: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidLength { found } => {
                write!(f, "Board text must be 100 characters, found {found}")
            }
            BoardParseError::InvalidCharacter { char, index } => {
                write!(f, "Invalid board character '{char}' at index {index}")
            }
            BoardParseError::MissingBorder { index } => {
                write!(f, "Expected border marker '?' at index {index}")
            }
            BoardParseError::MisplacedBorder { index } => {
                write!(f, "Border marker '?' at playable index {index}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
