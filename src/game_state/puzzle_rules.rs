//! Constants of the 4x4 promotion variant and its starting layouts.
//!
//! White is the only side that ever moves. Black pieces, when present, are
//! static obstacles a knight may capture.

use crate::game_state::board::Board;
use crate::game_state::puzzle_types::{Color, Piece, PieceKind, Square};

pub const BOARD_SIZE: usize = 4;

/// Pawns reaching this row are promoted to a queen.
pub const PROMOTION_ROW: u8 = 0;

/// The puzzle is solved once a white queen stands here.
pub const TARGET_SQUARE: Square = match Square::new(0, 3) {
    Some(square) => square,
    None => panic!("target square must be on the board"),
};

pub const SIDE_TO_MOVE: Color = Color::White;

pub const DEFAULT_DEPTH_LIMIT: u32 = 13;

/// Starting position with row 3 open apart from the pawn.
pub const OPEN_LAYOUT_DIAGRAM: &str = "NNNN/BBBB/RRRR/3P";

/// Starting position with (3,1) and (3,2) blocked.
pub const RED_SQUARES_LAYOUT_DIAGRAM: &str = "NNNN/BBBB/RRRR/1xxP";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PuzzleLayout {
    #[default]
    Open,
    RedSquares,
}

const BACK_ROWS: [PieceKind; 3] = [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook];
const PAWN_SQUARE: (u8, u8) = (3, 3);
const RED_SQUARES: [(u8, u8); 2] = [(3, 1), (3, 2)];

pub fn starting_board(layout: PuzzleLayout) -> Board {
    let mut board = Board::empty();

    for (row, kind) in BACK_ROWS.iter().enumerate() {
        for col in 0..BOARD_SIZE {
            if let Some(square) = Square::new(row as u8, col as u8) {
                board.set_piece(square, Some(Piece::white(*kind)));
            }
        }
    }

    if let Some(square) = Square::new(PAWN_SQUARE.0, PAWN_SQUARE.1) {
        board.set_piece(square, Some(Piece::white(PieceKind::Pawn)));
    }

    if layout == PuzzleLayout::RedSquares {
        for (row, col) in RED_SQUARES {
            if let Some(square) = Square::new(row, col) {
                board.set_blocked(square, true);
            }
        }
    }

    board
}
