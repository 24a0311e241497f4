//! The move executor: in-place make/unmake.
//!
//! `apply_move` mutates the board and returns an `UndoState`; `undo_move`
//! restores the pre-move state bit-for-bit, including castling rights, the
//! en-passant target, and the half-move clock. The search engine leans on
//! this pair to explore positions without copying the board.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{
    pawn_direction, promotion_rank, rook_castle_destination, rook_home,
};
use crate::game_state::chess_types::{CastleSide, GameState, Move, Piece, PieceKind, Square};
use crate::game_state::undo_state::UndoState;

/// Apply `mv` to `state`. The move must have been produced by the move
/// generator for the piece on `mv.from` (or validated upstream); the only
/// rejected input is an empty origin square.
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<UndoState, ChessError> {
    let moved_piece = state
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySquare(mv.from))?;
    let color = moved_piece.color;

    let mut undo = UndoState {
        mv: *mv,
        moved_piece,
        captured: None,
        prev_castling_rights: state.castling_rights,
        prev_en_passant_target: state.en_passant_target,
        prev_halfmove_clock: state.halfmove_clock,
    };

    // Relocate the captured piece off-board. The en-passant victim sits
    // behind the destination square, not on it.
    if mv.flags.en_passant {
        let victim_square = Square::new(
            (mv.to.row as i8 - pawn_direction(color)) as u8,
            mv.to.col,
        );
        if let Some(victim) = state.take(victim_square) {
            undo.captured = Some((victim_square, victim));
        }
    } else if let Some(victim) = state.take(mv.to) {
        undo.captured = Some((mv.to, victim));
    }

    // Castling relocates the rook alongside the king.
    if let Some(side) = mv.flags.castling {
        if let Some(rook) = state.take(rook_home(color, side)) {
            state.place(rook_castle_destination(color, side), rook);
        }
    }

    // Relocate the mover, promoting a pawn that reaches the last rank to a
    // queen (no under-promotion choice is offered).
    state.take(mv.from);
    let placed = if moved_piece.kind == PieceKind::Pawn && mv.to.row == promotion_rank(color) {
        Piece::new(PieceKind::Queen, color)
    } else {
        moved_piece
    };
    state.place(mv.to, placed);

    // The en-passant target only survives the single ply after a double
    // push, pointing at the skipped square.
    state.en_passant_target = if mv.flags.double_push {
        Some(Square::new(
            (mv.to.row as i8 - pawn_direction(color)) as u8,
            mv.to.col,
        ))
    } else {
        None
    };

    update_castling_rights(state, &undo);

    if moved_piece.kind == PieceKind::Pawn || undo.captured.is_some() {
        state.halfmove_clock = 0;
    } else {
        state.halfmove_clock = state.halfmove_clock.saturating_add(1);
    }

    state.side_to_move = color.opposite();

    Ok(undo)
}

/// Exact inverse of `apply_move`.
pub fn undo_move(state: &mut GameState, undo: &UndoState) {
    let mv = &undo.mv;
    let color = undo.moved_piece.color;

    // Putting the original piece back also reverses promotion.
    state.take(mv.to);
    state.place(mv.from, undo.moved_piece);

    if let Some((square, victim)) = undo.captured {
        state.place(square, victim);
    }

    if let Some(side) = mv.flags.castling {
        if let Some(rook) = state.take(rook_castle_destination(color, side)) {
            state.place(rook_home(color, side), rook);
        }
    }

    state.castling_rights = undo.prev_castling_rights;
    state.en_passant_target = undo.prev_en_passant_target;
    state.halfmove_clock = undo.prev_halfmove_clock;
    state.side_to_move = color;
}

/// Rights die permanently when the king moves, when a rook leaves its home
/// square, or when a rook is captured on its home square.
fn update_castling_rights(state: &mut GameState, undo: &UndoState) {
    let mv = &undo.mv;
    let color = undo.moved_piece.color;

    match undo.moved_piece.kind {
        PieceKind::King => state.castling_rights.revoke_both(color),
        PieceKind::Rook => {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if mv.from == rook_home(color, side) {
                    state.castling_rights.revoke(color, side);
                }
            }
        }
        _ => {}
    }

    if let Some((square, victim)) = undo.captured {
        if victim.kind == PieceKind::Rook {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if square == rook_home(victim.color, side) {
                    state.castling_rights.revoke(victim.color, side);
                }
            }
        }
    }
}
