//! King lookup, square-attack testing, and check detection.
//!
//! Attack testing uses raw geometric reach (ignoring the attacker's own
//! check status), which is what both check detection and castling-path
//! validation need.

use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};

/// Linear scan for the king of `color`. Reachable states always hold
/// exactly one king per color; `None` only appears for hand-built test
/// positions.
pub fn king_square(state: &GameState, color: Color) -> Option<Square> {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square::new(row, col);
            if let Some(piece) = state.piece_at(square) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some(square);
                }
            }
        }
    }
    None
}

/// Whether any piece of `attacker_color` geometrically reaches `square`.
pub fn is_square_attacked(state: &GameState, square: Square, attacker_color: Color) -> bool {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            if let Some(piece) = state.piece_at(from) {
                if piece.color == attacker_color && piece_attacks_square(state, from, piece, square)
                {
                    return true;
                }
            }
        }
    }
    false
}

#[inline]
pub fn is_in_check(state: &GameState, color: Color) -> bool {
    match king_square(state, color) {
        Some(square) => is_square_attacked(state, square, color.opposite()),
        None => false,
    }
}

fn piece_attacks_square(state: &GameState, from: Square, piece: Piece, target: Square) -> bool {
    let d_row = target.row as i8 - from.row as i8;
    let d_col = target.col as i8 - from.col as i8;
    if d_row == 0 && d_col == 0 {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => d_row == pawn_direction(piece.color) && d_col.abs() == 1,
        PieceKind::Knight => {
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
        }
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Rook => (d_row == 0 || d_col == 0) && ray_is_clear(state, from, target),
        PieceKind::Bishop => d_row.abs() == d_col.abs() && ray_is_clear(state, from, target),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && ray_is_clear(state, from, target)
        }
    }
}

/// All squares strictly between `from` and `target` are empty. Only called
/// for aligned pairs.
fn ray_is_clear(state: &GameState, from: Square, target: Square) -> bool {
    let step_row = (target.row as i8 - from.row as i8).signum();
    let step_col = (target.col as i8 - from.col as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(square) => square,
            None => return false,
        };
        if current == target {
            return true;
        }
        if state.piece_at(current).is_some() {
            return false;
        }
    }
}
