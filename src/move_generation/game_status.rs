//! Game-end evaluation built on the legal move generator.
//!
//! Terminal precedence after a move: checkmate first, then stalemate and
//! the fifty-move rule, then check (status display only, not terminal).

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Status of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a reply.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::FiftyMoveDraw
        )
    }
}

pub fn is_checkmate(state: &mut GameState, color: Color) -> bool {
    is_in_check(state, color) && !has_any_legal_move(state, color)
}

pub fn is_stalemate(state: &mut GameState, color: Color) -> bool {
    !is_in_check(state, color) && !has_any_legal_move(state, color)
}

#[inline]
pub fn is_fifty_move_draw(state: &GameState) -> bool {
    state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT
}

/// Evaluate the position for the side to move.
pub fn game_status(state: &mut GameState) -> GameStatus {
    let color = state.side_to_move;
    let in_check = is_in_check(state, color);

    if !has_any_legal_move(state, color) {
        return if in_check {
            GameStatus::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if is_fifty_move_draw(state) {
        return GameStatus::FiftyMoveDraw;
    }

    if in_check {
        return GameStatus::Check(color);
    }

    GameStatus::Ongoing
}
