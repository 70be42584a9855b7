//! Tic-tac-toe with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with make/unmake primitives
//! - **Rules**: line scoring and position classification ([`rules`])
//! - **Search**: exhaustive minimax with alpha-beta pruning ([`search`])
//! - **Session**: human-versus-engine turn taking ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{best_move, Board, Move};
//!
//! // A to move, with two in a row on top.
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Move::new(0, 2).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use board::Board;
pub use error::{BoardParseError, MoveError, SessionError};
pub use position::Move;
pub use rules::{evaluate, status, Score};
pub use search::{best_move, best_move_for, Pruning, SearchReport, Searcher};
pub use session::{GameSession, Phase, Turn};
pub use types::{Cell, Outcome, Side, Status};
