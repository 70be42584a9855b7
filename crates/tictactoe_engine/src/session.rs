//! Human-versus-engine game session.
//!
//! The human plays [`Side::B`] and moves first; the engine plays [`Side::A`]
//! and answers each human move with one call to [`search::best_move`].
//! Once a line is completed or the board fills, the session is terminal and
//! only [`GameSession::reset`] starts a new game.

use crate::{rules, search, Board, Move, Outcome, SessionError, Side, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// The game has finished.
    Terminal(Outcome),
}

/// What happened during one human turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The accepted human move.
    pub human: Move,
    /// The engine's reply, absent if the human move ended the game.
    pub engine: Option<Move>,
    /// Phase after both moves.
    pub phase: Phase,
}

/// A game between a human and the search engine.
///
/// A loaded session takes its phase from the board, not from the input;
/// the side to move is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedSession")]
pub struct GameSession {
    board: Board,
    to_move: Side,
    phase: Phase,
}

/// Wire form of [`GameSession`]. A stored `phase` is ignored.
#[derive(Deserialize)]
struct SavedSession {
    board: Board,
    to_move: Side,
}

impl From<SavedSession> for GameSession {
    fn from(saved: SavedSession) -> Self {
        let phase = match rules::status(&saved.board).outcome() {
            Some(outcome) => Phase::Terminal(outcome),
            None => Phase::InProgress,
        };
        Self {
            board: saved.board,
            to_move: saved.to_move,
            phase,
        }
    }
}

impl GameSession {
    /// Side controlled by the human.
    pub const HUMAN: Side = Side::B;

    /// Side controlled by the engine.
    pub const ENGINE: Side = Side::A;

    /// Creates a new session: empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Self::HUMAN,
            phase: Phase::InProgress,
        }
    }

    /// Returns a fresh session. Available from any state.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        info!("Starting a new game");
        Self::new()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the result of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::InProgress => None,
            Phase::Terminal(outcome) => Some(outcome),
        }
    }

    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Side controlled by the human.
    pub fn human(&self) -> Side {
        Self::HUMAN
    }

    /// Side controlled by the engine.
    pub fn engine(&self) -> Side {
        Self::ENGINE
    }

    /// True when a click on this cell should be ignored.
    pub fn is_cell_disabled(&self, mv: Move) -> bool {
        !self.board.is_open(mv) || self.is_over()
    }

    /// One-line description of the game for display.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Terminal(Outcome::Winner(side)) if side == Self::ENGINE => {
                "Engine wins!".to_string()
            }
            Phase::Terminal(Outcome::Winner(_)) => "You win!".to_string(),
            Phase::Terminal(Outcome::Draw) => "It's a tie!".to_string(),
            Phase::InProgress if self.to_move == Self::HUMAN => {
                format!("Your turn ({})", self.to_move)
            }
            Phase::InProgress => format!("Engine's turn ({})", self.to_move),
        }
    }

    /// Plays the human's move, then lets the engine reply.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the game has finished.
    /// - [`SessionError::NotYourTurn`] if the engine is to move.
    /// - [`SessionError::InvalidMove`] if the cell is occupied.
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(position = %mv))]
    pub fn submit_human_move(&mut self, mv: Move) -> Result<Turn, SessionError> {
        self.check_turn(Self::HUMAN)?;
        self.board.apply_move(mv, Self::HUMAN)?;
        debug!(label = mv.label(), "Human move accepted");

        let engine = if self.advance() {
            None
        } else {
            self.request_engine_move()?
        };

        Ok(Turn {
            human: mv,
            engine,
            phase: self.phase,
        })
    }

    /// Asks the search engine for its move and plays it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the game has finished.
    /// - [`SessionError::NotYourTurn`] if the human is to move.
    #[instrument(skip(self))]
    pub fn request_engine_move(&mut self) -> Result<Option<Move>, SessionError> {
        self.check_turn(Self::ENGINE)?;

        let reply = search::best_move(&self.board);
        if let Some(mv) = reply {
            self.board.apply_move(mv, Self::ENGINE)?;
            debug!(position = %mv, label = mv.label(), "Engine move played");
        }
        self.advance();

        Ok(reply)
    }

    fn check_turn(&self, side: Side) -> Result<(), SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.to_move != side {
            return Err(SessionError::NotYourTurn(side));
        }
        Ok(())
    }

    /// Re-evaluates the board after a move. Returns true if the game ended.
    fn advance(&mut self) -> bool {
        match rules::status(&self.board) {
            Status::InProgress => {
                self.to_move = self.to_move.opponent();
                false
            }
            status => {
                if let Some(outcome) = status.outcome() {
                    info!(%outcome, "Game over");
                    self.phase = Phase::Terminal(outcome);
                }
                true
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
