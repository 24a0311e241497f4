//! The game session: the boundary between the rules engine and the UI /
//! network layers.
//!
//! Owns the canonical board for one game, routes local input, validated
//! remote input, and computer-move requests through the same executor path,
//! and tracks history, captured pieces, and the thinking flag. All board
//! mutation is synchronous on one logical thread; the session guarantees at
//! most one in-flight search and at most one in-flight move application,
//! and move input is rejected while the thinking flag is set.

use tracing::{debug, info, warn};

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, GameState, Move, Piece, Square};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::protocol::messages::MoveMessage;
use crate::utils::algebraic::move_notation;

pub struct GameSession {
    state: GameState,
    history: Vec<UndoState>,
    /// Pieces taken by each color, indexed by the capturing side.
    captured: [Vec<Piece>; 2],
    last_move: Option<(Square, Square)>,
    thinking: bool,
    timeout_winner: Option<Color>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh session at the standard starting position.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            last_move: None,
            thinking: false,
            timeout_winner: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Winner declared by a relayed timeout notification, if any.
    pub fn timeout_winner(&self) -> Option<Color> {
        self.timeout_winner
    }

    /// Mark a search as scheduled but not yet run. UI layers that defer the
    /// actual search to a later task set this first so move input is
    /// rejected in the meantime; `request_computer_move` manages the flag
    /// itself.
    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    /// Discard current state and reinitialize to the standard start. Valid
    /// at any time; the relay may signal a restart mid-game.
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("game restarted");
    }

    /// Status of the position for the side to move.
    pub fn status(&mut self) -> GameStatus {
        game_status(&mut self.state)
    }

    pub fn is_game_over(&mut self) -> bool {
        self.timeout_winner.is_some() || self.status().is_terminal()
    }

    /// Legal moves of the piece on `square` for display highlighting.
    /// Empty while a search is pending, for empty squares, and for pieces
    /// of the side not on move.
    pub fn select_square(&mut self, square: Square) -> Vec<Move> {
        if self.thinking {
            return Vec::new();
        }
        match self.state.piece_at(square) {
            Some(piece) if piece.color == self.state.side_to_move => {
                legal_moves(&mut self.state, square)
            }
            _ => Vec::new(),
        }
    }

    /// Apply a locally requested move after validating it against the legal
    /// set for its origin square. Returns the committed move record in the
    /// shape relayed to the peer.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<MoveMessage, ChessError> {
        self.ensure_accepting_input()?;

        let piece = self
            .state
            .piece_at(from)
            .ok_or(ChessError::EmptySquare(from))?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::OutOfTurn {
                square: from,
                color: piece.color,
            });
        }

        let candidate = legal_moves(&mut self.state, from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(ChessError::IllegalMove { from, to })?;

        self.commit(candidate)
    }

    /// Apply a move received from the network peer. Unlike the original
    /// trusted-apply protocol, the move is re-validated; an illegal remote
    /// move surfaces a desync error and leaves the board untouched.
    pub fn apply_remote_move(&mut self, message: &MoveMessage) -> Result<(), ChessError> {
        self.ensure_accepting_input()?;

        let rejected = ChessError::RemoteMoveRejected {
            from: message.from,
            to: message.to,
        };

        if message.color != self.state.side_to_move {
            warn!(color = ?message.color, "remote move out of turn");
            return Err(rejected);
        }
        let Some(piece) = self.state.piece_at(message.from) else {
            warn!("remote move from an empty square");
            return Err(rejected);
        };
        if piece.color != message.color {
            warn!("remote move targets an opposing piece");
            return Err(rejected);
        }

        let Some(candidate) = legal_moves(&mut self.state, message.from)
            .into_iter()
            .find(|mv| mv.to == message.to)
        else {
            warn!(
                from_row = message.from.row,
                from_col = message.from.col,
                to_row = message.to.row,
                to_col = message.to.col,
                "remote move is illegal; peer desync suspected"
            );
            return Err(rejected);
        };

        self.commit(candidate)?;
        Ok(())
    }

    /// Run `engine` for the side to move and commit its choice. Used both
    /// for the computer opponent and for the best-move assist; depth and
    /// time policy come from `params`.
    pub fn request_computer_move(
        &mut self,
        engine: &mut dyn Engine,
        params: &SearchParams,
    ) -> Result<MoveMessage, ChessError> {
        self.ensure_accepting_input()?;

        self.thinking = true;
        let result = engine.choose_move(&mut self.state, params);
        self.thinking = false;

        let output = result?;
        for line in &output.info_lines {
            debug!(engine = engine.name(), "{line}");
        }

        let mv = output.best_move.ok_or(ChessError::NoLegalMoves)?;
        self.commit(mv)
    }

    /// Record a relayed timeout verdict: the side whose clock ran out
    /// loses. Returns the winner.
    pub fn report_timeout(&mut self, color: Color) -> Color {
        let winner = color.opposite();
        self.timeout_winner = Some(winner);
        info!(loser = ?color, winner = ?winner, "timeout reported");
        winner
    }

    fn ensure_accepting_input(&mut self) -> Result<(), ChessError> {
        if self.thinking {
            return Err(ChessError::SearchBusy);
        }
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> Result<MoveMessage, ChessError> {
        let color = self.state.side_to_move;
        let undo = apply_move(&mut self.state, &mv)?;

        if let Some((_, victim)) = undo.captured {
            self.captured[color.index()].push(victim);
        }
        self.history.push(undo);
        self.last_move = Some((mv.from, mv.to));

        info!(notation = %move_notation(&undo), color = ?color, "move committed");
        let status = self.status();
        if status.is_terminal() {
            info!(?status, "game over");
        }

        Ok(MoveMessage {
            from: mv.from,
            to: mv.to,
            color,
        })
    }
}
