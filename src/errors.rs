//! Errors used throughout the puzzle engine.
//!
//! The search space is closed, so every variant except `InvalidDiagram`
//! signals a broken make/undo pairing or a malformed square rather than bad
//! user input. Callers propagate them with `?` and abort the run.

use thiserror::Error;

use crate::game_state::puzzle_types::Square;

pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Coordinates outside the 4x4 grid.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// `make_move` was asked to move a piece that is not there.
    #[error("no piece on source square {0}")]
    EmptySourceSquare(Square),

    /// `undo_move` without a matching `make_move`.
    #[error("undo requested with an empty move history")]
    EmptyMoveHistory,

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}
