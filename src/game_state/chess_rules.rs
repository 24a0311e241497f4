//! Canonical chess-rule constants.
//!
//! Static rule literals shared by setup, move generation, and the game-end
//! evaluator: the starting back-rank layout, home ranks, and the half-move
//! count at which the fifty-move rule forces a draw.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Plies since the last pawn move or capture at which the game is drawn
/// (100 half-moves, i.e. 50 full moves).
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Forward row delta for pawns of `color` (White advances toward row 0).
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Home square of the rook on the given wing.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    let col = match side {
        CastleSide::KingSide => 7,
        CastleSide::QueenSide => 0,
    };
    Square::new(back_rank(color), col)
}

/// Where the castling rook ends up on the given wing.
#[inline]
pub const fn rook_castle_destination(color: Color, side: CastleSide) -> Square {
    let col = match side {
        CastleSide::KingSide => 5,
        CastleSide::QueenSide => 3,
    };
    Square::new(back_rank(color), col)
}
