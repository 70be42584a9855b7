//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
///
/// The engine always searches as [`Side::A`], the maximizing side. The human
/// plays [`Side::B`] and moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// Maximizing side, rendered as `X`.
    #[strum(to_string = "X")]
    A,
    /// Minimizing side, rendered as `O`.
    #[strum(to_string = "O")]
    B,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by side A.
    A,
    /// Occupied by side B.
    B,
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Side::A),
            Cell::B => Some(Side::B),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character rendering used by the board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'X',
            Cell::B => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Winner(Side),
    /// The board filled up with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(Side::A) => write!(f, "A wins"),
            Outcome::Winner(Side::B) => write!(f, "B wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// Board is full with no line completed.
    Draw,
}

impl Status {
    /// Returns true for a won or drawn position.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Converts a terminal status into an outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Won(side) => Some(Outcome::Winner(*side)),
            Status::Draw => Some(Outcome::Draw),
        }
    }
}
