//! The standard computer opponent: alpha-beta minimax behind the engine
//! trait.

use std::time::{Duration, Instant};

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessError;
use crate::game_state::chess_types::GameState;
use crate::search::minimax::find_best_move;

#[derive(Debug, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "ParlorChess Minimax"
    }

    fn choose_move(
        &mut self,
        state: &mut GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessError> {
        let color = state.side_to_move;
        let started = Instant::now();
        let best_move = find_best_move(
            state,
            params.depth,
            color,
            Duration::from_millis(params.movetime_ms),
        )?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "minimax_engine depth {} elapsed_ms {}",
            params.depth,
            started.elapsed().as_millis()
        ));
        out.best_move = best_move;
        Ok(out)
    }
}
