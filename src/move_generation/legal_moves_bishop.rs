use crate::game_state::chess_types::{Color, GameState, Move, Square};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_sliding_moves(state, from, color, &DIAGONAL_DIRECTIONS, out);
}
