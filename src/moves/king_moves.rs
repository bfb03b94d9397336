use crate::game_state::board::Board;
use crate::game_state::puzzle_types::Square;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Single-step queen: rook directions first, then bishop directions, vacant
/// cells only.
pub fn king_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    for (d_row, d_col) in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        if let Some(to) = from.offset(d_row, d_col) {
            if board.is_vacant(to) {
                out.push(to);
            }
        }
    }
}
