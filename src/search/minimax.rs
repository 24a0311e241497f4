//! Depth-limited minimax with alpha-beta pruning and capture-first move
//! ordering.
//!
//! The maximizing role is always Black and the minimizing role always White,
//! fixed by the evaluator's Black-positive sign convention; callers pass the
//! `maximizing` flag matching the side to move at each ply. Exploration uses
//! the executor's make/unmake pair, so the board is restored exactly before
//! every return. The time budget is a soft cutoff polled at node entry; a
//! search may overrun by one node's worth of recursion.

use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;

use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, GameState, Move};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{evaluate, Score};

/// Base magnitude of a mate score; biased by remaining depth so faster
/// mates dominate slower ones.
pub const MATE_SCORE: Score = 100_000;
const MATE_DEPTH_BIAS: Score = 10;

/// Alpha-beta window bounds. Wider than any reachable evaluation.
pub const MIN_SCORE: Score = -1_000_000;
pub const MAX_SCORE: Score = 1_000_000;

/// Wall-clock budget for one search invocation.
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    started: Instant,
    budget: Duration,
}

impl SearchClock {
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.started.elapsed() > self.budget
    }
}

#[inline]
fn is_capture(state: &GameState, mv: &Move) -> bool {
    mv.flags.en_passant || state.piece_at(mv.to).is_some()
}

/// Stable sort putting capturing moves before quiet ones. No finer
/// capture-value ordering; generation order is preserved within each class.
fn order_captures_first(state: &GameState, moves: &mut [Move]) {
    moves.sort_by_key(|mv| !is_capture(state, mv));
}

/// Pick a move for `color` by scoring every legal move to `depth` plies
/// under `time_budget`. One of the equal-best moves is chosen uniformly at
/// random; the variety is intentional. Returns `None` when the side has no
/// legal move (callers normally exclude this via the game-end evaluator).
pub fn find_best_move(
    state: &mut GameState,
    depth: u8,
    color: Color,
    time_budget: Duration,
) -> Result<Option<Move>, ChessError> {
    let mut moves = all_legal_moves(state, color);
    if moves.is_empty() {
        return Ok(None);
    }
    order_captures_first(state, &mut moves);

    let clock = SearchClock::start(time_budget);
    let maximizing = color == Color::Black;
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
    let mut best_moves: Vec<Move> = Vec::new();

    for mv in &moves {
        let score = evaluate_move(state, mv, depth, color, &clock)?;
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_moves.clear();
            best_moves.push(*mv);
        } else if score == best_score {
            best_moves.push(*mv);
        }
    }

    let mut rng = rand::rng();
    Ok(best_moves.as_slice().choose(&mut rng).copied())
}

/// Score a single candidate move: apply it, evaluate statically at the
/// horizon or recurse into the full window, then undo exactly.
pub fn evaluate_move(
    state: &mut GameState,
    mv: &Move,
    depth: u8,
    color: Color,
    clock: &SearchClock,
) -> Result<Score, ChessError> {
    let undo = apply_move(state, mv)?;

    let result = if depth <= 1 {
        Ok(evaluate(state))
    } else {
        // After `color` moves, the other side is to play; Black keeps the
        // maximizing role.
        minimax(
            state,
            depth - 1,
            MIN_SCORE,
            MAX_SCORE,
            color == Color::White,
            clock,
        )
    };

    undo_move(state, &undo);
    result
}

/// Standard alpha-beta over the fixed Black-max/White-min roles. `depth`
/// counts remaining plies; `maximizing` must match the side to move at this
/// node.
pub fn minimax(
    state: &mut GameState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    clock: &SearchClock,
) -> Result<Score, ChessError> {
    if depth == 0 || clock.expired() {
        return Ok(evaluate(state));
    }

    let color = if maximizing {
        Color::Black
    } else {
        Color::White
    };

    let mut moves = all_legal_moves(state, color);
    if moves.is_empty() {
        if is_in_check(state, color) {
            let bias = MATE_DEPTH_BIAS - depth as Score;
            return Ok(if maximizing {
                -MATE_SCORE + bias
            } else {
                MATE_SCORE - bias
            });
        }
        return Ok(0);
    }
    order_captures_first(state, &mut moves);

    if maximizing {
        let mut value = MIN_SCORE;
        for mv in &moves {
            let undo = apply_move(state, mv)?;
            let child = minimax(state, depth - 1, alpha, beta, false, clock);
            undo_move(state, &undo);
            let child = child?;
            if child > value {
                value = child;
            }
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = MAX_SCORE;
        for mv in &moves {
            let undo = apply_move(state, mv)?;
            let child = minimax(state, depth - 1, alpha, beta, true, clock);
            undo_move(state, &undo);
            let child = child?;
            if child < value {
                value = child;
            }
            if value < beta {
                beta = value;
            }
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::find_best_move;
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
    use std::collections::HashSet;
    use std::time::Duration;

    const BUDGET: Duration = Duration::from_secs(5);

    /// White king boxed on g1 by its own pawns; the black a8 rook mates on
    /// a1.
    fn mate_in_one_for_black() -> GameState {
        let mut state = GameState::empty();
        state.place(Square::new(7, 6), Piece::new(PieceKind::King, Color::White));
        state.place(Square::new(6, 5), Piece::new(PieceKind::Pawn, Color::White));
        state.place(Square::new(6, 6), Piece::new(PieceKind::Pawn, Color::White));
        state.place(Square::new(6, 7), Piece::new(PieceKind::Pawn, Color::White));
        state.place(Square::new(0, 0), Piece::new(PieceKind::Rook, Color::Black));
        state.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        state.side_to_move = Color::Black;
        state
    }

    #[test]
    fn finds_the_back_rank_mate() {
        let mut state = mate_in_one_for_black();
        for _ in 0..5 {
            let mv = find_best_move(&mut state, 3, Color::Black, BUDGET)
                .expect("search succeeds")
                .expect("a move exists");
            assert_eq!(mv.from, Square::new(0, 0));
            assert_eq!(mv.to, Square::new(7, 0));
        }
    }

    #[test]
    fn mated_side_has_no_move_to_offer() {
        let mut state = mate_in_one_for_black();
        // Deliver the mate, then ask the mated side for a move.
        let mate = find_best_move(&mut state, 2, Color::Black, BUDGET)
            .expect("search succeeds")
            .expect("a move exists");
        crate::move_generation::legal_move_apply::apply_move(&mut state, &mate)
            .expect("mate applies");
        let reply =
            find_best_move(&mut state, 2, Color::White, BUDGET).expect("search succeeds");
        assert!(reply.is_none());
    }

    #[test]
    fn hanging_queen_capture_is_strictly_best() {
        let mut state = GameState::empty();
        state.place(Square::new(0, 0), Piece::new(PieceKind::King, Color::Black));
        state.place(Square::new(7, 7), Piece::new(PieceKind::King, Color::White));
        state.place(Square::new(3, 3), Piece::new(PieceKind::Rook, Color::Black));
        state.place(Square::new(3, 6), Piece::new(PieceKind::Queen, Color::White));
        state.side_to_move = Color::Black;

        for _ in 0..10 {
            let mv = find_best_move(&mut state, 1, Color::Black, BUDGET)
                .expect("search succeeds")
                .expect("a move exists");
            assert_eq!(mv.from, Square::new(3, 3));
            assert_eq!(mv.to, Square::new(3, 6));
        }
    }

    #[test]
    fn equal_best_moves_are_spread_by_the_tie_break() {
        let mut state = GameState::empty();
        state.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        state.place(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        state.side_to_move = Color::Black;

        let mut seen = HashSet::new();
        for _ in 0..100 {
            let mv = find_best_move(&mut state, 1, Color::Black, BUDGET)
                .expect("search succeeds")
                .expect("a move exists");
            seen.insert((mv.to.row, mv.to.col));
        }
        assert!(seen.len() > 1, "tie-break never varied over 100 trials");
    }

    #[test]
    fn exhausted_budget_still_returns_a_move() {
        let mut state = GameState::new_game();
        let mv = find_best_move(&mut state, 4, Color::White, Duration::ZERO)
            .expect("search succeeds");
        assert!(mv.is_some());
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut state = GameState::new_game();
        let snapshot = state.clone();
        find_best_move(&mut state, 3, Color::White, BUDGET).expect("search succeeds");
        assert_eq!(state, snapshot);
    }
}
