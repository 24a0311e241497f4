//! Static position scoring: material plus piece-square bonuses.
//!
//! Scores are signed so that positive favors Black and negative favors
//! White. The search engine's fixed min/max roles (Black maximizes, White
//! minimizes) depend on this convention. Positional bonuses exist for pawns
//! and knights only; tables are authored from White's viewpoint and
//! mirrored vertically for Black.

use crate::game_state::chess_types::{Color, GameState, PieceKind};

pub type Score = i32;

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [[Score; 8]; 8] = [
    [ 0,   0,   0,   0,   0,   0,   0,  0],
    [50,  50,  50,  50,  50,  50,  50, 50],
    [10,  10,  20,  30,  30,  20,  10, 10],
    [ 5,   5,  10,  25,  25,  10,   5,  5],
    [ 0,   0,   0,  20,  20,   0,   0,  0],
    [ 5,  -5, -10,   0,   0, -10,  -5,  5],
    [ 5,  10,  10, -20, -20,  10,  10,  5],
    [ 0,   0,   0,   0,   0,   0,   0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[Score; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Material plus positional score over the whole board, Black-positive.
pub fn evaluate(state: &GameState) -> Score {
    let mut score = 0;

    for row in 0..8usize {
        for col in 0..8usize {
            let Some(piece) = state.squares[row][col] else {
                continue;
            };

            let table_row = match piece.color {
                Color::White => row,
                Color::Black => 7 - row,
            };
            let mut value = piece_value(piece.kind);
            match piece.kind {
                PieceKind::Pawn => value += PAWN_TABLE[table_row][col],
                PieceKind::Knight => value += KNIGHT_TABLE[table_row][col],
                _ => {}
            }

            score += match piece.color {
                Color::Black => value,
                Color::White => -value,
            };
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::{evaluate, piece_value};
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&GameState::new_game()), 0);
    }

    #[test]
    fn sign_convention_favors_black() {
        let mut state = GameState::empty();
        state.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        state.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        state.place(Square::new(4, 3), Piece::new(PieceKind::Rook, Color::Black));
        assert_eq!(evaluate(&state), piece_value(PieceKind::Rook));

        state.take(Square::new(4, 3));
        state.place(Square::new(4, 3), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(evaluate(&state), -piece_value(PieceKind::Rook));
    }

    #[test]
    fn pawn_table_is_mirrored_for_black() {
        // A white pawn one step from promotion and a black pawn one step
        // from promotion read the same bonus row.
        let mut white_side = GameState::empty();
        white_side.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        white_side.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        white_side.place(Square::new(1, 0), Piece::new(PieceKind::Pawn, Color::White));

        let mut black_side = GameState::empty();
        black_side.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        black_side.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        black_side.place(Square::new(6, 0), Piece::new(PieceKind::Pawn, Color::Black));

        assert_eq!(evaluate(&white_side), -evaluate(&black_side));
    }

    #[test]
    fn knight_prefers_the_center() {
        let mut centered = GameState::empty();
        centered.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        centered.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        centered.place(
            Square::new(3, 3),
            Piece::new(PieceKind::Knight, Color::Black),
        );

        let mut cornered = GameState::empty();
        cornered.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        cornered.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        cornered.place(
            Square::new(0, 0),
            Piece::new(PieceKind::Knight, Color::Black),
        );

        assert!(evaluate(&centered) > evaluate(&cornered));
    }
}
