//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
