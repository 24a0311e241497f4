//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! squares, and renders committed moves as short notation for history
//! display and logs. Row 0 maps to rank 8.

use crate::errors::ChessError;
use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::game_state::undo_state::UndoState;

/// Convert a square to coordinate text (for example: `e4`).
#[inline]
pub fn square_to_coord(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}

/// Parse coordinate text (for example: `e4`) into a square.
pub fn coord_to_square(coord: &str) -> Result<Square, ChessError> {
    let bytes = coord.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(coord.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(coord.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

const fn piece_symbol(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "K",
        PieceKind::Queen => "Q",
        PieceKind::Rook => "R",
        PieceKind::Bishop => "B",
        PieceKind::Knight => "N",
        PieceKind::Pawn => "",
    }
}

/// Short notation for a committed move: piece symbol, `x` on capture (pawn
/// captures keep their file letter), destination square; castling renders
/// as `O-O` / `O-O-O`.
pub fn move_notation(record: &UndoState) -> String {
    if let Some(side) = record.mv.flags.castling {
        return match side {
            CastleSide::KingSide => "O-O".to_owned(),
            CastleSide::QueenSide => "O-O-O".to_owned(),
        };
    }

    let symbol = piece_symbol(record.moved_piece.kind);
    let capture = if record.captured.is_some() { "x" } else { "" };
    let pawn_file = if !capture.is_empty() && symbol.is_empty() {
        square_to_coord(record.mv.from)[..1].to_owned()
    } else {
        String::new()
    };

    format!(
        "{symbol}{pawn_file}{capture}{}",
        square_to_coord(record.mv.to)
    )
}
