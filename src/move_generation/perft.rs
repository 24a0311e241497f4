//! Perft: exhaustive move-tree counting for generator validation.
//!
//! Counts all move sequences to a fixed depth, classifying leaf moves so a
//! wrong special-move rule shows up in its own column instead of hiding in
//! the node total.

use crate::errors::ChessError;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{GameState, PieceKind};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(state: &mut GameState, depth: u8) -> Result<PerftCounts, ChessError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = all_legal_moves(state, state.side_to_move);
    let mut total = PerftCounts::default();

    for mv in moves {
        let moving_pawn = state
            .piece_at(mv.from)
            .map(|p| (p.kind == PieceKind::Pawn, p.color));
        let undo = apply_move(state, &mv)?;

        if depth == 1 {
            total.nodes += 1;
            if undo.captured.is_some() {
                total.captures += 1;
            }
            if mv.flags.en_passant {
                total.en_passant += 1;
            }
            if mv.flags.castling.is_some() {
                total.castles += 1;
            }
            if let Some((true, color)) = moving_pawn {
                if mv.to.row == promotion_rank(color) {
                    total.promotions += 1;
                }
            }
        } else {
            let below = perft(state, depth - 1);
            undo_move(state, &undo);
            total.merge(below?);
            continue;
        }

        undo_move(state, &undo);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn start_position_perft_matches_reference_counts() {
        let mut state = GameState::new_game();
        let snapshot = state.clone();

        assert_eq!(perft(&mut state, 1).expect("depth 1").nodes, 20);
        assert_eq!(perft(&mut state, 2).expect("depth 2").nodes, 400);

        let depth3 = perft(&mut state, 3).expect("depth 3");
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.en_passant, 0);
        assert_eq!(depth3.castles, 0);

        // The walk itself must leave no trace.
        assert_eq!(state, snapshot);
    }
}
