//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. [`evaluate`] only scores completed lines
//! and cannot tell a draw from an unfinished game; [`status`] combines it with
//! [`Board::is_full`] to classify a position.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{winner, LINES};

use crate::{Board, Side, Status};
use tracing::instrument;

/// Integer position score, positive favours side A.
pub type Score = i32;

/// Terminal score when side A has a complete line.
pub const A_WIN: Score = 10;

/// Terminal score when side B has a complete line.
pub const B_WIN: Score = -10;

/// Score of any position without a complete line.
pub const NEUTRAL: Score = 0;

/// Scores completed lines: [`A_WIN`], [`B_WIN`], or [`NEUTRAL`].
///
/// The first complete line found decides. Under alternating play only one
/// side can ever hold a line, so the result is unambiguous.
pub fn evaluate(board: &Board) -> Score {
    match winner(board) {
        Some(Side::A) => A_WIN,
        Some(Side::B) => B_WIN,
        None => NEUTRAL,
    }
}

/// Classifies a position as won, drawn, or still in progress.
#[instrument(level = "trace", ret)]
pub fn status(board: &Board) -> Status {
    match evaluate(board) {
        A_WIN => Status::Won(Side::A),
        B_WIN => Status::Won(Side::B),
        _ if board.is_full() => Status::Draw,
        _ => Status::InProgress,
    }
}
