//! Core value types for the 4x4 promotion puzzle.
//!
//! Squares are addressed as `(row, col)` with row 0 being the promotion
//! rank. A `Square` can only be built from on-board coordinates, so every
//! consumer downstream of construction can index the grid without checks.

use std::fmt;

use crate::errors::{PuzzleError, PuzzleResult};
use crate::game_state::puzzle_rules::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(Color::White, kind)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(Color::Black, kind)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Color::White => "white",
            Color::Black => "black",
        };
        let kind = match self.kind {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{color}_{kind}")
    }
}

/// An on-board cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_coords(row: i32, col: i32) -> PuzzleResult<Self> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(PuzzleError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..16`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The square reached by stepping `(d_row, d_col)`, if it is still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        Self::from_coords(row, col).ok()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A bare coordinate pair. No piece or capture annotation is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> PuzzleResult<Self> {
        Ok(Self {
            from: Square::from_coords(from_row, from_col)?,
            to: Square::from_coords(to_row, to_col)?,
        })
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// `(from_row, from_col, to_row, to_col)`.
    #[inline]
    pub const fn coords(self) -> (u8, u8, u8, u8) {
        (self.from.row, self.from.col, self.to.row, self.to.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fr, fc, tr, tc) = self.coords();
        write!(f, "({fr}, {fc}, {tr}, {tc})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_off_board_coordinates() {
        assert!(Square::new(3, 3).is_some());
        assert!(Square::new(4, 0).is_none());
        assert_eq!(
            Square::from_coords(-1, 2),
            Err(PuzzleError::OutOfBounds { row: -1, col: 2 })
        );
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 3).unwrap();
        assert_eq!(corner.offset(1, -1), Square::new(1, 2));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let mv = Move::from_coords(2, 1, 0, 0).unwrap();
        assert_eq!(mv.reversed().coords(), (0, 0, 2, 1));
        assert_eq!(mv.reversed().reversed(), mv);
    }

    #[test]
    fn pieces_display_with_color_prefix() {
        assert_eq!(Piece::white(PieceKind::Pawn).to_string(), "white_pawn");
        assert_eq!(Piece::black(PieceKind::Knight).to_string(), "black_knight");
    }
}
