//! Mutable puzzle state walked by the search.
//!
//! `GameState` owns the board, the undo stack, and the last applied move
//! (consulted by the anti-oscillation filter). One instance is mutated in
//! place along the search path and restored on every backtrack.

use crate::errors::PuzzleResult;
use crate::game_state::board::Board;
use crate::game_state::puzzle_rules::{starting_board, PuzzleLayout, SIDE_TO_MOVE, TARGET_SQUARE};
use crate::game_state::puzzle_types::{Color, Move, Piece, PieceKind};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::utils::board_diagram::{generate_diagram, parse_diagram};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // Make/undo stack; its length is the current search depth.
    pub move_history: Vec<UndoState>,

    pub last_move: Option<Move>,
}

impl GameState {
    /// The fixed initial position: knights on row 0, bishops on row 1, rooks
    /// on row 2, and a lone pawn on (3,3).
    #[inline]
    pub fn new_game() -> Self {
        Self::from_layout(PuzzleLayout::Open)
    }

    pub fn from_layout(layout: PuzzleLayout) -> Self {
        Self::from_board(starting_board(layout))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            move_history: Vec::new(),
            last_move: None,
        }
    }

    pub fn from_diagram(diagram: &str) -> PuzzleResult<Self> {
        parse_diagram(diagram).map(Self::from_board)
    }

    #[inline]
    pub fn get_diagram(&self) -> String {
        generate_diagram(&self.board)
    }

    /// Always white: the opposing side never moves in this variant.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        SIDE_TO_MOVE
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.move_history.len()
    }

    /// Solved iff a white queen stands on the target square. Promotions
    /// elsewhere do not count.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.piece_at(TARGET_SQUARE) == Some(Piece::white(PieceKind::Queen))
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move) -> PuzzleResult<()> {
        make_move_in_place(self, mv)
    }

    #[inline]
    pub fn undo_move(&mut self) -> PuzzleResult<UndoState> {
        unmake_move_in_place(self)
    }
}
