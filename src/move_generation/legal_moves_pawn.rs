use crate::game_state::chess_rules::{pawn_direction, pawn_rank};
use crate::game_state::chess_types::{Color, GameState, Move, Square};

pub fn generate_pawn_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let direction = pawn_direction(color);

    // Single push, then double push from the starting rank.
    if let Some(one_step) = from.offset(direction, 0) {
        if state.piece_at(one_step).is_none() {
            out.push(Move::new(from, one_step));

            if from.row == pawn_rank(color) {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if state.piece_at(two_step).is_none() {
                        let mut mv = Move::new(from, two_step);
                        mv.flags.double_push = true;
                        out.push(mv);
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, d_col) else {
            continue;
        };
        match state.piece_at(to) {
            Some(target) if target.color != color => out.push(Move::new(from, to)),
            Some(_) => {}
            None => {
                if state.en_passant_target == Some(to) {
                    let mut mv = Move::new(from, to);
                    mv.flags.en_passant = true;
                    out.push(mv);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};

    fn pawn(color: Color) -> Piece {
        Piece::new(PieceKind::Pawn, color)
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let state = GameState::new_game();
        let mut moves = Vec::new();
        generate_pawn_moves(&state, Square::new(6, 4), Color::White, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == Square::new(5, 4)));
        assert!(moves
            .iter()
            .any(|m| m.to == Square::new(4, 4) && m.flags.double_push));
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let mut state = GameState::empty();
        state.place(Square::new(6, 4), pawn(Color::White));
        state.place(Square::new(5, 4), pawn(Color::Black));
        let mut moves = Vec::new();
        generate_pawn_moves(&state, Square::new(6, 4), Color::White, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn en_passant_target_yields_flagged_capture() {
        let mut state = GameState::empty();
        state.place(Square::new(3, 4), pawn(Color::White));
        state.place(Square::new(3, 5), pawn(Color::Black));
        state.en_passant_target = Some(Square::new(2, 5));

        let mut moves = Vec::new();
        generate_pawn_moves(&state, Square::new(3, 4), Color::White, &mut moves);
        let ep = moves
            .iter()
            .find(|m| m.to == Square::new(2, 5))
            .expect("en passant capture generated");
        assert!(ep.flags.en_passant);
    }
}
