use crate::game_state::game_state::GameState;
use crate::game_state::puzzle_types::Move;

/// Produces every candidate move for the side to move, in a deterministic
/// order. The search's leaf count and first-solution reporting depend on
/// that order being stable across runs.
pub trait MoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move>;
}
