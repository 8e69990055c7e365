//! Core board types.
//!
//! - `Side` and `Cell` - players and cell contents
//! - `Square` and `Direction` - coordinates and offsets in the padded frame
//! - `MoveList` - legal squares in ascending order

mod moves;
mod side;
mod square;

pub use moves::{MoveList, MoveListIntoIter};
pub use side::{Cell, Side};
pub use square::{Direction, Square};

pub(crate) use square::FRAME_WIDTH;
