//! Crate root module declarations for the 4x4 promotion puzzle solver.
//!
//! Exposes the board and game-state model, per-piece move geometry, move
//! generation with make/undo, the exhaustive search driver, and text
//! utilities so the binary, benches, and tests can import stable paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod puzzle_rules;
    pub mod puzzle_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_trace;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
}

pub mod search {
    pub mod exhaustive_search;
    pub mod search_observer;
}

pub mod utils {
    pub mod board_diagram;
    pub mod render_game_state;
}
