use crate::game_state::board::Board;
use crate::game_state::puzzle_types::Square;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Rook targets followed by bishop targets.
#[inline]
pub fn queen_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    rook_targets(board, from, out);
    bishop_targets(board, from, out);
}

#[cfg(test)]
mod tests {
    use super::queen_targets;
    use crate::game_state::board::Board;
    use crate::game_state::puzzle_types::Square;
    use crate::moves::bishop_moves::bishop_targets;
    use crate::moves::rook_moves::rook_targets;

    #[test]
    fn queen_targets_are_rook_then_bishop() {
        let board = Board::empty();
        let from = Square::new(1, 2).expect("square should be on the board");

        let mut expected = Vec::new();
        rook_targets(&board, from, &mut expected);
        bishop_targets(&board, from, &mut expected);

        let mut out = Vec::new();
        queen_targets(&board, from, &mut out);
        assert_eq!(out, expected);
        assert_eq!(out.len(), 6 + 5);
    }
}
