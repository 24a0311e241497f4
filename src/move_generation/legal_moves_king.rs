use crate::game_state::chess_rules::back_rank;
use crate::game_state::chess_types::{CastleSide, Color, GameState, Move, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{generate_offset_moves, ALL_DIRECTIONS};

pub fn generate_king_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_offset_moves(state, from, color, &ALL_DIRECTIONS, out);
    generate_castling_moves(state, from, color, out);
}

/// Castling on a wing is available only while the corresponding right is
/// still true, the squares between king and rook are empty, the king is not
/// currently in check, and neither the king's destination nor the square it
/// passes through is attacked.
fn generate_castling_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let rank = back_rank(color);
    let enemy = color.opposite();

    // Castling is only generated from the king's home square; rights imply
    // the king has never moved, so this also filters hand-built positions.
    if from != Square::new(rank, 4) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(state, from, enemy) {
        return;
    }

    let rights = state.castling_rights.side(color);

    if rights.king_side
        && state.piece_at(Square::new(rank, 5)).is_none()
        && state.piece_at(Square::new(rank, 6)).is_none()
        && !is_square_attacked(state, Square::new(rank, 5), enemy)
        && !is_square_attacked(state, Square::new(rank, 6), enemy)
    {
        let mut mv = Move::new(from, Square::new(rank, 6));
        mv.flags.castling = Some(CastleSide::KingSide);
        out.push(mv);
    }

    if rights.queen_side
        && state.piece_at(Square::new(rank, 1)).is_none()
        && state.piece_at(Square::new(rank, 2)).is_none()
        && state.piece_at(Square::new(rank, 3)).is_none()
        && !is_square_attacked(state, Square::new(rank, 3), enemy)
        && !is_square_attacked(state, Square::new(rank, 2), enemy)
    {
        let mut mv = Move::new(from, Square::new(rank, 2));
        mv.flags.castling = Some(CastleSide::QueenSide);
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{
        CastleSide, CastlingRights, Color, GameState, Piece, PieceKind, Square,
    };

    fn castling_position() -> GameState {
        let mut state = GameState::empty();
        state.castling_rights = CastlingRights::initial();
        state.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        state.place(Square::new(7, 7), Piece::new(PieceKind::Rook, Color::White));
        state.place(Square::new(7, 0), Piece::new(PieceKind::Rook, Color::White));
        state.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        state
    }

    fn castle_moves(state: &GameState) -> Vec<CastleSide> {
        let mut moves = Vec::new();
        generate_king_moves(state, Square::new(7, 4), Color::White, &mut moves);
        moves.iter().filter_map(|m| m.flags.castling).collect()
    }

    #[test]
    fn both_wings_available_on_open_back_rank() {
        let state = castling_position();
        let castles = castle_moves(&state);
        assert!(castles.contains(&CastleSide::KingSide));
        assert!(castles.contains(&CastleSide::QueenSide));
    }

    #[test]
    fn occupied_f_file_blocks_king_side() {
        let mut state = castling_position();
        state.place(
            Square::new(7, 5),
            Piece::new(PieceKind::Bishop, Color::White),
        );
        let castles = castle_moves(&state);
        assert!(!castles.contains(&CastleSide::KingSide));
        assert!(castles.contains(&CastleSide::QueenSide));
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let mut state = castling_position();
        state.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        state.place(Square::new(4, 4), Piece::new(PieceKind::Rook, Color::Black));
        assert!(castle_moves(&state).is_empty());
    }

    #[test]
    fn attacked_transit_square_blocks_king_side() {
        let mut state = castling_position();
        // Black rook eyes f1 down the f-file.
        state.place(Square::new(3, 5), Piece::new(PieceKind::Rook, Color::Black));
        let castles = castle_moves(&state);
        assert!(!castles.contains(&CastleSide::KingSide));
        assert!(castles.contains(&CastleSide::QueenSide));
    }

    #[test]
    fn revoked_right_removes_wing() {
        let mut state = castling_position();
        state
            .castling_rights
            .revoke(Color::White, CastleSide::QueenSide);
        let castles = castle_moves(&state);
        assert!(castles.contains(&CastleSide::KingSide));
        assert!(!castles.contains(&CastleSide::QueenSide));
    }
}
