//! Text diagrams for 4x4 puzzle boards.
//!
//! Modelled on the board field of FEN: four ranks separated by `/`, the
//! first rank being row 0 (the promotion rank). Uppercase letters are white
//! pieces, lowercase are black (`p n b r q k`), digits `1`-`4` are runs of
//! empty cells and `x` is a blocked cell.

use crate::errors::{PuzzleError, PuzzleResult};
use crate::game_state::board::Board;
use crate::game_state::puzzle_rules::BOARD_SIZE;
use crate::game_state::puzzle_types::{Color, Piece, PieceKind, Square};

const BLOCKED_CHAR: char = 'x';

pub fn parse_diagram(diagram: &str) -> PuzzleResult<Board> {
    let ranks: Vec<&str> = diagram.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(invalid(format!(
            "expected {BOARD_SIZE} ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(invalid(format!("invalid empty-cell count '{ch}'")));
                }
                col += step;
                continue;
            }

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| invalid(format!("rank {row} has too many cells")))?;

            if ch == BLOCKED_CHAR {
                board.set_blocked(square, true);
            } else {
                let piece = piece_from_diagram_char(ch)
                    .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
                board.set_piece(square, Some(piece));
            }
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(invalid(format!(
                "rank {row} covers {col} cells instead of {BOARD_SIZE}"
            )));
        }
    }

    Ok(board)
}

pub fn generate_diagram(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE as u8 {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE as u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };

            let ch = if board.is_blocked(square) {
                Some(BLOCKED_CHAR)
            } else {
                board.piece_at(square).map(piece_to_diagram_char)
            };

            match ch {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if (row as usize) < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}

fn invalid(msg: String) -> PuzzleError {
    PuzzleError::InvalidDiagram(msg)
}

fn piece_from_diagram_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

fn piece_to_diagram_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_diagram, parse_diagram};
    use crate::errors::PuzzleError;
    use crate::game_state::puzzle_rules::{OPEN_LAYOUT_DIAGRAM, RED_SQUARES_LAYOUT_DIAGRAM};
    use crate::game_state::puzzle_types::{Piece, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn parses_mixed_pieces_and_blocked_cells() {
        let board = parse_diagram("n2Q/4/1x2/k2P").expect("diagram should parse");

        assert_eq!(board.piece_at(sq(0, 0)), Some(Piece::black(PieceKind::Knight)));
        assert_eq!(board.piece_at(sq(0, 3)), Some(Piece::white(PieceKind::Queen)));
        assert!(board.is_blocked(sq(2, 1)));
        assert_eq!(board.piece_at(sq(3, 0)), Some(Piece::black(PieceKind::King)));
        assert_eq!(board.piece_at(sq(3, 3)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(board.pieces().count(), 4);
    }

    #[test]
    fn layouts_survive_a_generate_pass() {
        for diagram in [OPEN_LAYOUT_DIAGRAM, RED_SQUARES_LAYOUT_DIAGRAM, "n2Q/4/1x2/k2P", "4/4/4/4"] {
            let board = parse_diagram(diagram).expect("diagram should parse");
            assert_eq!(generate_diagram(&board), diagram);
        }
    }

    #[test]
    fn malformed_diagrams_are_rejected() {
        for bad in ["NNNN/BBBB/RRRR", "NNNN/BBBB/RRRR/3P/4", "NNNNN/4/4/4", "3/4/4/4", "5/4/4/4", "z3/4/4/4", "0NNNN/4/4/4"] {
            assert!(
                matches!(parse_diagram(bad), Err(PuzzleError::InvalidDiagram(_))),
                "{bad} should be rejected"
            );
        }
    }
}
