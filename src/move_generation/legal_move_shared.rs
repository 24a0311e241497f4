use crate::game_state::chess_types::{Color, GameState, Move, Square};

/// Rank/file directions used by rooks (and half of the queen set).
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal directions used by bishops (and half of the queen set).
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight king/queen directions.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight fixed knight offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Ray-cast from `from` in each direction until blocked. The blocking
/// square is included only when it holds an enemy piece.
pub fn generate_sliding_moves(
    state: &GameState,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match state.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Single-step moves onto empty or enemy-occupied squares (knights, king
/// ring).
pub fn generate_offset_moves(
    state: &GameState,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            match state.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) if target.color != color => out.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
    }
}
