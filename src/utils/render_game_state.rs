//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::puzzle_rules::BOARD_SIZE;
use crate::game_state::puzzle_types::{Color, Piece, PieceKind, Square};

/// Render the board with row 0 at the top, column indices along the edges.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            let ch = match Square::new(row, col) {
                Some(square) if board.is_blocked(square) => '×',
                Some(square) => board.piece_at(square).map_or('·', piece_to_unicode),
                None => '?',
            };
            out.push(ch);

            if (col as usize) < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str("  0 1 2 3");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
