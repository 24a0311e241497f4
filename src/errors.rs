//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Functions return
//! `Result<_, ChessError>` for expected failure modes (empty squares, moves
//! outside the legal set, rejected remote input); internal algorithms stay
//! total over well-formed positions.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A move or query referenced a square with no piece on it.
    EmptySquare(Square),

    /// A move was requested for a piece that does not belong to the side to
    /// move.
    OutOfTurn { square: Square, color: Color },

    /// A locally requested move is not in the legal set for its origin
    /// square. The board is left untouched.
    IllegalMove { from: Square, to: Square },

    /// A move received from the network peer failed legality validation.
    /// Signals a desynchronized or misbehaving peer; the board is left
    /// untouched.
    RemoteMoveRejected { from: Square, to: Square },

    /// No legal moves are available for the side a search was requested for.
    /// Callers normally prevent this by consulting the game-end evaluator
    /// first.
    NoLegalMoves,

    /// A move or search was requested while a search is already in flight.
    SearchBusy,

    /// A move was requested after the game reached a terminal state.
    GameOver,

    /// An algebraic coordinate string could not be parsed.
    InvalidCoordinate(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::EmptySquare(sq) => {
                write!(f, "no piece on square ({}, {})", sq.row, sq.col)
            }
            ChessError::OutOfTurn { square, color } => write!(
                f,
                "piece on ({}, {}) belongs to {color:?}, who is not to move",
                square.row, square.col
            ),
            ChessError::IllegalMove { from, to } => write!(
                f,
                "move ({}, {}) -> ({}, {}) is not legal",
                from.row, from.col, to.row, to.col
            ),
            ChessError::RemoteMoveRejected { from, to } => write!(
                f,
                "remote move ({}, {}) -> ({}, {}) failed validation; peer desync suspected",
                from.row, from.col, to.row, to.col
            ),
            ChessError::NoLegalMoves => write!(f, "no legal moves for the side to move"),
            ChessError::SearchBusy => write!(f, "a search is already in progress"),
            ChessError::GameOver => write!(f, "the game has already ended"),
            ChessError::InvalidCoordinate(s) => write!(f, "invalid coordinate: {s}"),
        }
    }
}

impl Error for ChessError {}
