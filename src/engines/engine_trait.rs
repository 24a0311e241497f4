//! Engine abstraction layer used by the game session.
//!
//! Defines common input parameters and output payloads so different
//! opponent strategies can be selected at runtime behind a single trait
//! interface.

use crate::errors::ChessError;
use crate::game_state::chess_types::{GameState, Move};

/// Time budget for ordinary computer-opponent moves, in milliseconds.
pub const PLAY_TIME_BUDGET_MS: u64 = 2000;

/// Depth and budget for the deeper best-move assist.
pub const ASSIST_DEPTH: u8 = 5;
pub const ASSIST_TIME_BUDGET_MS: u64 = 5000;

/// Caller-supplied search policy. Depth and budget are external tuning
/// parameters, not engine invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u8,
    pub movetime_ms: u64,
}

impl SearchParams {
    /// Ordinary computer-opponent policy: difficulty maps directly onto
    /// shallow search depths.
    pub fn play(difficulty: u8) -> Self {
        Self {
            depth: difficulty.clamp(1, 4),
            movetime_ms: PLAY_TIME_BUDGET_MS,
        }
    }

    /// Deeper analysis policy for the best-move assist.
    pub fn assist() -> Self {
        Self {
            depth: ASSIST_DEPTH,
            movetime_ms: ASSIST_TIME_BUDGET_MS,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::play(3)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. The board is explored in place and
    /// restored exactly before returning.
    fn choose_move(
        &mut self,
        state: &mut GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessError>;
}
