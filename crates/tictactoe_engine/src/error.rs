//! Error types for board and session operations.

use crate::{Move, Side};

/// A move that cannot be placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside `0..3` on either axis.
    #[display("Move ({row}, {col}) is off the board (rows and columns are 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell is already occupied.
    #[display("Square {_0} is already occupied")]
    Occupied(Move),

    /// Text input that names no cell.
    #[display("Cannot read a move from {_0:?}")]
    Unparsable(String),
}

impl std::error::Error for MoveError {}

/// A session transition that was rejected.
///
/// Rejected transitions leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The move itself is bad for this board.
    #[from]
    #[display("Invalid move: {_0}")]
    InvalidMove(MoveError),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// The submitting side is not the side to move.
    #[display("It's not {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Side),
}

impl SessionError {
    /// True for out-of-turn or after-the-end submissions.
    pub fn is_illegal(&self) -> bool {
        matches!(self, SessionError::GameOver | SessionError::NotYourTurn(_))
    }

    /// True when the move was rejected by the board.
    pub fn is_invalid(&self) -> bool {
        matches!(self, SessionError::InvalidMove(_))
    }
}

/// Failure to read a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(usize),

    /// A character that is not a cell symbol.
    #[display("Unexpected character {_0:?} in board")]
    BadSymbol(char),
}

impl std::error::Error for BoardParseError {}
