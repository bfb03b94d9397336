use crate::game_state::board::Board;
use crate::game_state::puzzle_types::{Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Knights may land on a vacant cell or capture a piece of the other color.
pub fn knight_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        let enemy_on_target = board
            .piece_at(to)
            .is_some_and(|piece| piece.color == color.opposite());

        if board.is_vacant(to) || enemy_on_target {
            out.push(to);
        }
    }
}
