//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, then filters out moves
//! that would leave the mover's own king in check by applying each
//! candidate, testing king safety, and undoing it. The make/unmake pair
//! must restore the board bit-for-bit; that symmetry is what the filter
//! (and the whole search stack) rests on.

use crate::game_state::chess_types::{Color, GameState, Move, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Movement-geometry moves for the piece on `from`, not yet checked for
/// king safety. Empty when the square is empty. Order is generation order
/// (piece-type dispatch, then directional array order); the search re-sorts
/// for pruning and never relies on it.
pub fn pseudo_moves(state: &GameState, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = state.piece_at(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(state, from, piece.color, &mut moves),
        PieceKind::Knight => generate_knight_moves(state, from, piece.color, &mut moves),
        PieceKind::Bishop => generate_bishop_moves(state, from, piece.color, &mut moves),
        PieceKind::Rook => generate_rook_moves(state, from, piece.color, &mut moves),
        PieceKind::Queen => generate_queen_moves(state, from, piece.color, &mut moves),
        PieceKind::King => generate_king_moves(state, from, piece.color, &mut moves),
    }

    moves
}

/// Fully legal moves for the piece on `from`: pseudo moves that leave the
/// mover's own king out of check.
pub fn legal_moves(state: &mut GameState, from: Square) -> Vec<Move> {
    let Some(piece) = state.piece_at(from) else {
        return Vec::new();
    };

    let mut legal = pseudo_moves(state, from);
    legal.retain(|mv| {
        match apply_move(state, mv) {
            Ok(undo) => {
                let safe = !is_in_check(state, piece.color);
                undo_move(state, &undo);
                safe
            }
            // The origin square is occupied by construction.
            Err(_) => false,
        }
    });
    legal
}

/// Every legal move for `color`, scanning squares in row-major order.
pub fn all_legal_moves(state: &mut GameState, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            if let Some(piece) = state.piece_at(from) {
                if piece.color == color {
                    moves.extend(legal_moves(state, from));
                }
            }
        }
    }
    moves
}

/// Whether some occupied square of `color` yields any legal move. Stops at
/// the first one found.
pub fn has_any_legal_move(state: &mut GameState, color: Color) -> bool {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            if let Some(piece) = state.piece_at(from) {
                if piece.color == color && !legal_moves(state, from).is_empty() {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, has_any_legal_move, legal_moves};
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut state = GameState::new_game();
        assert_eq!(all_legal_moves(&mut state, Color::White).len(), 20);
        let snapshot = GameState::new_game();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        let mut state = GameState::empty();
        state.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        state.place(
            Square::new(5, 4),
            Piece::new(PieceKind::Knight, Color::White),
        );
        state.place(Square::new(0, 4), Piece::new(PieceKind::Rook, Color::Black));
        state.place(Square::new(0, 0), Piece::new(PieceKind::King, Color::Black));

        // The knight is pinned to the e-file; every knight move is illegal.
        assert!(legal_moves(&mut state, Square::new(5, 4)).is_empty());
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let mut state = GameState::empty();
        state.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        state.place(Square::new(0, 3), Piece::new(PieceKind::Rook, Color::Black));
        state.place(Square::new(0, 0), Piece::new(PieceKind::King, Color::Black));

        let moves = legal_moves(&mut state, Square::new(7, 4));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.to.col != 3));
    }

    #[test]
    fn side_with_moves_reports_having_them() {
        let mut state = GameState::new_game();
        assert!(has_any_legal_move(&mut state, Color::White));
        assert!(has_any_legal_move(&mut state, Color::Black));
    }
}
