//! Ordered ray walking shared by the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::puzzle_types::Square;

/// Appends every vacant square along `(d_row, d_col)` from `from`, nearest
/// first. The walk stops before the first occupied or blocked cell; sliding
/// pieces never land on it.
pub fn trace_ray(board: &Board, from: Square, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = from;

    while let Some(next) = current.offset(d_row, d_col) {
        if !board.is_vacant(next) {
            break;
        }
        out.push(next);
        current = next;
    }
}

/// Traces each direction in order.
pub fn trace_rays(board: &Board, from: Square, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, d_row, d_col, out);
    }
}
