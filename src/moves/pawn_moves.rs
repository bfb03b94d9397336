use crate::game_state::board::Board;
use crate::game_state::puzzle_types::{Color, Square};

/// One step forward onto a vacant cell. No captures, no double step.
pub fn pawn_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    if let Some(to) = from.offset(color.forward_step(), 0) {
        if board.is_vacant(to) {
            out.push(to);
        }
    }
}
