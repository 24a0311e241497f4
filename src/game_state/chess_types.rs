//! Core value types shared by every subsystem.
//!
//! Squares are (row, col) pairs with row 0 at Black's back rank and col 0 on
//! the a-file, matching the orientation the UI and relay peers use. Pieces
//! are immutable values; promotion replaces the piece wholesale.

use serde::{Deserialize, Serialize};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying a square. Serializes as `{type, color}`, the
/// shape board snapshots carry to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 White's; col 0 is the
/// a-file. Serializes as `{row, col}`, the shape relayed over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Both components must already be in `0..=7`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset by (d_row, d_col), or `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Which wing a castling move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Special-move annotations produced by the move generator and consumed by
/// the executor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub en_passant: bool,
    pub castling: Option<CastleSide>,
    /// Two-square pawn advance; arms `en_passant_target` for one ply.
    pub double_push: bool,
}

/// A candidate move: annotated by the generator, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flags: MoveFlags,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            flags: MoveFlags {
                en_passant: false,
                castling: None,
                double_push: false,
            },
        }
    }
}

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

/// Per-color castling rights. Rights only ever transition true -> false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    rights: [SideRights; 2],
}

impl CastlingRights {
    #[inline]
    pub const fn initial() -> Self {
        Self {
            rights: [SideRights {
                king_side: true,
                queen_side: true,
            }; 2],
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            rights: [SideRights {
                king_side: false,
                queen_side: false,
            }; 2],
        }
    }

    #[inline]
    pub fn side(&self, color: Color) -> SideRights {
        self.rights[color.index()]
    }

    #[inline]
    pub fn side_mut(&mut self, color: Color) -> &mut SideRights {
        &mut self.rights[color.index()]
    }

    /// Both wings die permanently when the king moves.
    #[inline]
    pub fn revoke_both(&mut self, color: Color) {
        *self.side_mut(color) = SideRights {
            king_side: false,
            queen_side: false,
        };
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match side {
            CastleSide::KingSide => self.side_mut(color).king_side = false,
            CastleSide::QueenSide => self.side_mut(color).queen_side = false,
        }
    }
}
