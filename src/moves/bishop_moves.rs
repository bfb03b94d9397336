use crate::game_state::board::Board;
use crate::game_state::puzzle_types::Square;
use crate::moves::ray_trace::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    trace_rays(board, from, &BISHOP_DIRECTIONS, out);
}
