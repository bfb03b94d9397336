use std::fmt;

use crate::game_state::puzzle_types::{Move, Piece};

/// Single undo record for `make_move` / `undo_move`.
///
/// Only the piece that stood on the source square before the move is kept
/// (the pawn, not its promoted queen). Whatever occupied the destination is
/// not recorded, so a knight capture is not reverted by `undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
}

impl fmt::Display for UndoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.mv, self.moved_piece)
    }
}
