//! Fixed 4x4 cell grid.
//!
//! Each cell is empty or holds a `Piece`. A separate blocked-cell mask marks
//! squares no piece may ever enter (the red squares of the puzzle's bottom
//! row); a blocked cell is never empty to the move generator and is never
//! capturable.

use crate::game_state::puzzle_rules::BOARD_SIZE;
use crate::game_state::puzzle_types::{Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    // Bit `square.index()` set when the cell is blocked.
    blocked: u16,
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            blocked: 0,
        }
    }

    #[inline]
    pub fn is_on_board(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(
            piece.is_none() || !self.is_blocked(square),
            "cannot place a piece on blocked square {square}"
        );
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_blocked(&self, square: Square) -> bool {
        (self.blocked >> square.index()) & 1 != 0
    }

    pub fn set_blocked(&mut self, square: Square, blocked: bool) {
        let bit = 1u16 << square.index();
        if blocked {
            self.cells[square.row() as usize][square.col() as usize] = None;
            self.blocked |= bit;
        } else {
            self.blocked &= !bit;
        }
    }

    /// Empty and not blocked: the only cells sliding pieces and pawns may enter.
    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        !self.is_blocked(square) && self.piece_at(square).is_none()
    }

    /// Every square in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).filter_map(move |col| Square::new(row, col)))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Self::squares().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::puzzle_types::{Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn bounds_predicate_covers_exactly_sixteen_cells() {
        let on_board = (-2..6)
            .flat_map(|r| (-2..6).map(move |c| (r, c)))
            .filter(|&(r, c)| Board::is_on_board(r, c))
            .count();
        assert_eq!(on_board, 16);
        assert!(!Board::is_on_board(0, 4));
        assert!(!Board::is_on_board(-1, 0));
    }

    #[test]
    fn set_and_take_round_trip_a_cell() {
        let mut board = Board::empty();
        let rook = Piece::white(PieceKind::Rook);
        board.set_piece(sq(2, 1), Some(rook));
        assert_eq!(board.piece_at(sq(2, 1)), Some(rook));
        assert!(!board.is_vacant(sq(2, 1)));
        assert_eq!(board.take_piece(sq(2, 1)), Some(rook));
        assert!(board.is_vacant(sq(2, 1)));
    }

    #[test]
    fn blocked_cells_are_neither_vacant_nor_occupied() {
        let mut board = Board::empty();
        board.set_blocked(sq(3, 1), true);
        assert!(board.is_blocked(sq(3, 1)));
        assert!(!board.is_vacant(sq(3, 1)));
        assert_eq!(board.piece_at(sq(3, 1)), None);
        assert_eq!(board.pieces().count(), 0);

        board.set_blocked(sq(3, 1), false);
        assert!(board.is_vacant(sq(3, 1)));
    }

    #[test]
    fn pieces_are_listed_row_major() {
        let mut board = Board::empty();
        board.set_piece(sq(3, 0), Some(Piece::white(PieceKind::Pawn)));
        board.set_piece(sq(0, 2), Some(Piece::white(PieceKind::Knight)));
        board.set_piece(sq(0, 1), Some(Piece::black(PieceKind::Rook)));

        let order: Vec<Square> = board.pieces().map(|(sq, _)| sq).collect();
        assert_eq!(order, vec![sq(0, 1), sq(0, 2), sq(3, 0)]);
    }
}
