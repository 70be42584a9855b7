//! The 3x3 board and its pure queries.

use crate::{BoardParseError, Cell, Move, MoveError, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// The board trusts its caller about turn order: it only guards against
/// placing on an occupied cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_open(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Empty coordinates in row-major order.
    ///
    /// The search walks moves in this order and keeps the first of several
    /// equally good moves, so the order decides ties.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_open(*mv))
            .collect()
    }

    /// Number of cells held by `side`.
    pub fn count(&self, side: Side) -> usize {
        let cell = Cell::from(side);
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Places `side` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell is taken; the board is left
    /// unchanged.
    pub fn apply_move(&mut self, mv: Move, side: Side) -> Result<(), MoveError> {
        if !self.is_open(mv) {
            return Err(MoveError::Occupied(mv));
        }
        self.cells[mv.index()] = side.into();
        Ok(())
    }

    /// Clears a cell filled by a previous [`Board::apply_move`].
    pub fn undo_move(&mut self, mv: Move) {
        debug_assert!(!self.is_open(mv), "undo of an empty cell {mv}");
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Places `side` without the occupancy check. Search-internal make step.
    pub(crate) fn place(&mut self, mv: Move, side: Side) {
        debug_assert!(self.is_open(mv), "place on occupied cell {mv}");
        self.cells[mv.index()] = side.into();
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, " {} ", self.cells[row * 3 + col].symbol())?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

/// Compact notation: `X`/`A` for side A, `O`/`B` for side B, `.`, `_` or `-`
/// for empty. `/` and whitespace are separators and ignored.
///
/// ```
/// use tictactoe_engine::{Board, Cell, Move};
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// assert_eq!(board.get(Move::new(1, 0).unwrap()), Cell::B);
/// ```
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' | 'A' | 'a' => cells.push(Cell::A),
                'O' | 'o' | 'B' | 'b' => cells.push(Cell::B),
                '.' | '_' | '-' => cells.push(Cell::Empty),
                '/' => {}
                c if c.is_whitespace() => {}
                other => return Err(BoardParseError::BadSymbol(other)),
            }
        }
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { cells })
    }
}
