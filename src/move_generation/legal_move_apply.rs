//! In-place make/undo for the search.
//!
//! `make_move_in_place` pushes exactly one `UndoState` and
//! `unmake_move_in_place` pops exactly one, so the history length always
//! equals the current search depth. Undo restores the source square from the
//! record and clears the destination unconditionally: a piece captured by a
//! knight stays off the board for the rest of the run.

use crate::errors::{PuzzleError, PuzzleResult};
use crate::game_state::game_state::GameState;
use crate::game_state::puzzle_rules::PROMOTION_ROW;
use crate::game_state::puzzle_types::{Move, Piece, PieceKind};
use crate::game_state::undo_state::UndoState;

pub fn make_move_in_place(game_state: &mut GameState, mv: Move) -> PuzzleResult<()> {
    let moved_piece = game_state
        .board
        .take_piece(mv.from)
        .ok_or(PuzzleError::EmptySourceSquare(mv.from))?;

    game_state.board.set_piece(mv.to, Some(landing_piece(moved_piece, mv)));

    game_state.move_history.push(UndoState { mv, moved_piece });
    game_state.last_move = Some(mv);

    Ok(())
}

pub fn unmake_move_in_place(game_state: &mut GameState) -> PuzzleResult<UndoState> {
    let undo = game_state
        .move_history
        .pop()
        .ok_or(PuzzleError::EmptyMoveHistory)?;

    game_state.board.set_piece(undo.mv.from, Some(undo.moved_piece));
    game_state.board.set_piece(undo.mv.to, None);

    Ok(undo)
}

/// Pawns landing on the promotion row become a queen of their color,
/// whatever the file.
#[inline]
fn landing_piece(moved_piece: Piece, mv: Move) -> Piece {
    if moved_piece.kind == PieceKind::Pawn && mv.to.row() == PROMOTION_ROW {
        Piece::new(moved_piece.color, PieceKind::Queen)
    } else {
        moved_piece
    }
}
