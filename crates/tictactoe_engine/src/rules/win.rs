//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Side};

const fn at(row: usize, col: usize) -> Move {
    Move::ALL[row * 3 + col]
}

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the side owning the first complete line, scanning [`LINES`] in order.
pub fn winner(board: &Board) -> Option<Side> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if !cell.is_empty() && cell == board.get(b) && cell == board.get(c) {
            return cell.side();
        }
    }
    None
}
