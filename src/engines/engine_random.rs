//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessError;
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "ParlorChess Random"
    }

    fn choose_move(
        &mut self,
        state: &mut GameState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, ChessError> {
        let legal_moves = all_legal_moves(state, state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        out.best_move = legal_moves.as_slice().choose(&mut rng).copied();
        Ok(out)
    }
}
