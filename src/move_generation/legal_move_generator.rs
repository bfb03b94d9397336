//! Full move generation for the side to move.
//!
//! Scans the board row-major and, for each piece of the side to move,
//! dispatches on its kind to the geometry in `moves/`. Every kind except the
//! pawn then has the immediate reversal of the last move filtered out.

use crate::game_state::game_state::GameState;
use crate::game_state::puzzle_types::{Move, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::{push_moves, uses_reversal_filter};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

pub struct PuzzleMoveGenerator;

impl MoveGenerator for PuzzleMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        generate_moves(game_state)
    }
}

pub fn generate_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut moves = Vec::with_capacity(32);

    for (from, piece) in game_state.board.pieces() {
        if piece.color == side {
            generate_piece_moves(game_state, from, piece, &mut moves);
        }
    }

    moves
}

pub fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let mut targets = Vec::with_capacity(12);

    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, piece.color, &mut targets),
        PieceKind::Knight => knight_targets(board, from, piece.color, &mut targets),
        PieceKind::Bishop => bishop_targets(board, from, &mut targets),
        PieceKind::Rook => rook_targets(board, from, &mut targets),
        PieceKind::Queen => queen_targets(board, from, &mut targets),
        PieceKind::King => king_targets(board, from, &mut targets),
    }

    push_moves(game_state, from, &targets, uses_reversal_filter(piece.kind), out);
}
