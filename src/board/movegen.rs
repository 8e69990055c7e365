//! Legal-move generation and capture resolution.

use super::error::IllegalMove;
use super::{Board, Cell, Direction, MoveList, Side, Square};

impl Board {
    /// Length of the opponent run that `side` would capture from `from` in
    /// direction `dir`, or 0 when the run is not closed by one of `side`'s discs.
    #[inline]
    fn capture_run(&self, side: Side, from: usize, dir: Direction) -> usize {
        let opponent = Cell::Disc(side.opponent());
        let mut idx = dir.step(from);
        let mut len = 0;
        while self.cells[idx] == opponent {
            idx = dir.step(idx);
            len += 1;
        }
        if len > 0 && self.cells[idx] == Cell::Disc(side) {
            len
        } else {
            0
        }
    }

    /// Number of discs `side` would flip by playing `square` (0 if illegal).
    #[must_use]
    pub fn flips(&self, side: Side, square: Square) -> usize {
        if self.cell(square) != Cell::Empty {
            return 0;
        }
        Direction::ALL
            .iter()
            .map(|&dir| self.capture_run(side, square.index(), dir))
            .sum()
    }

    /// Whether `side` may play `square`: it must be empty and close at least
    /// one run of opponent discs in some direction.
    #[must_use]
    pub fn is_legal(&self, side: Side, square: Square) -> bool {
        self.cell(square) == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&dir| self.capture_run(side, square.index(), dir) > 0)
    }

    /// All legal squares for `side`, in ascending square order.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for square in Square::all() {
            if self.is_legal(side, square) {
                moves.push(square);
            }
        }
        moves
    }

    /// Whether `side` has at least one legal move. Stops at the first hit.
    #[must_use]
    pub fn has_any_move(&self, side: Side) -> bool {
        Square::all().any(|square| self.is_legal(side, square))
    }

    /// The side that must move after `just_moved`.
    ///
    /// Returns the opponent if it can move, otherwise `just_moved` again if it
    /// can move (the opponent passes), otherwise `None`: the game is over.
    #[must_use]
    pub fn next_to_move(&self, just_moved: Side) -> Option<Side> {
        let opponent = just_moved.opponent();
        if self.has_any_move(opponent) {
            Some(opponent)
        } else if self.has_any_move(just_moved) {
            Some(just_moved)
        } else {
            None
        }
    }

    /// Neither side has a legal move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_any_move(Side::Black) && !self.has_any_move(Side::White)
    }

    /// Play `square` for `side`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the square is not a legal move for `side`.
    pub fn apply(&self, side: Side, square: Square) -> Result<Board, IllegalMove> {
        if !self.is_legal(side, square) {
            return Err(IllegalMove {
                side,
                square,
                board: *self,
            });
        }
        Ok(self.apply_unchecked(side, square))
    }

    /// Play a move already known to be legal (taken from `legal_moves`).
    pub(crate) fn apply_unchecked(&self, side: Side, square: Square) -> Board {
        debug_assert!(self.is_legal(side, square), "{side} cannot play {square}");
        let mut next = *self;
        for dir in Direction::ALL {
            let run = self.capture_run(side, square.index(), dir);
            let mut idx = square.index();
            for _ in 0..run {
                idx = dir.step(idx);
                next.cells[idx] = Cell::Disc(side);
            }
        }
        next.set(square, Cell::Disc(side));
        next
    }
}
