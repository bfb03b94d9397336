use crate::game_state::board::Board;
use crate::game_state::puzzle_types::Square;
use crate::moves::ray_trace::trace_rays;

/// Down, up, right, left. Generation order depends on this ordering.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    trace_rays(board, from, &ROOK_DIRECTIONS, out);
}
