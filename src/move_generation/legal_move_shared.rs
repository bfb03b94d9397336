use crate::game_state::game_state::GameState;
use crate::game_state::puzzle_types::{Move, PieceKind, Square};

/// True when `candidate` would undo the move just played.
#[inline]
pub fn is_reversal_of_last_move(game_state: &GameState, candidate: Move) -> bool {
    game_state.last_move == Some(candidate.reversed())
}

/// Pawns only move forward and can never reverse themselves.
#[inline]
pub const fn uses_reversal_filter(kind: PieceKind) -> bool {
    !matches!(kind, PieceKind::Pawn)
}

/// Converts target squares into moves from `from`, dropping the immediate
/// reversal of the last move when `filtered` is set.
pub fn push_moves(
    game_state: &GameState,
    from: Square,
    targets: &[Square],
    filtered: bool,
    out: &mut Vec<Move>,
) {
    for &to in targets {
        let mv = Move::new(from, to);
        if filtered && is_reversal_of_last_move(game_state, mv) {
            continue;
        }
        out.push(mv);
    }
}
