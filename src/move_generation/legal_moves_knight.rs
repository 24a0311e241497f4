use crate::game_state::chess_types::{Color, GameState, Move, Square};
use crate::move_generation::legal_move_shared::{generate_offset_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_offset_moves(state, from, color, &KNIGHT_OFFSETS, out);
}
