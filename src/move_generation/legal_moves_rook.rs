use crate::game_state::chess_types::{Color, GameState, Move, Square};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_sliding_moves(state, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
