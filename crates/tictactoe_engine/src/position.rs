//! Board coordinates.

use crate::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

/// A `(row, col)` coordinate on the 3x3 board.
///
/// Both axes are guaranteed to be in `0..3`; construction goes through
/// [`Move::new`] or [`Move::from_index`], which reject anything else.
/// Deserialization runs the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Move`].
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl Move {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, rejecting coordinates off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Reads a move from user input.
    ///
    /// Accepts `"row col"`, `"row,col"`, a single row-major index, or a cell
    /// label ("center", "top-left", ...).
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let trimmed = input.trim();
        let unparsable = || MoveError::Unparsable(input.to_string());

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                match (row.parse::<usize>(), col.parse::<usize>()) {
                    (Ok(row), Ok(col)) => Self::new(row, col),
                    _ => Self::from_label(trimmed).ok_or_else(unparsable),
                }
            }
            [single] => {
                if let Ok(index) = single.parse::<usize>() {
                    return Self::from_index(index).ok_or_else(unparsable);
                }
                Self::from_label(single).ok_or_else(unparsable)
            }
            _ => Err(unparsable()),
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        let wanted = s.to_lowercase().replace(' ', "-");
        LABELS
            .iter()
            .position(|label| label.to_lowercase() == wanted)
            .and_then(Self::from_index)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Move::new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert!(Move::new(0, 7).is_err());
        assert!(Move::new(2, 2).is_ok());
    }

    #[test]
    fn test_parse_coordinates() {
        let expected = Move::new(1, 2).unwrap();
        assert_eq!(Move::parse("1 2").unwrap(), expected);
        assert_eq!(Move::parse("1,2").unwrap(), expected);
        assert_eq!(Move::parse(" 1, 2 ").unwrap(), expected);
        assert_eq!(Move::parse("5").unwrap(), expected);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Move::parse("center").unwrap(), Move::new(1, 1).unwrap());
        assert_eq!(Move::parse("Top-left").unwrap(), Move::new(0, 0).unwrap());
        assert_eq!(
            Move::parse("bottom right").unwrap(),
            Move::new(2, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Move::parse("banana"), Err(MoveError::Unparsable(_))));
        assert!(matches!(Move::parse("9"), Err(MoveError::Unparsable(_))));
        assert!(matches!(
            Move::parse("3 1"),
            Err(MoveError::OutOfRange { row: 3, col: 1 })
        ));
        assert!(Move::parse("").is_err());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let ok: Move = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(ok, Move::new(2, 1).unwrap());

        let err = serde_json::from_str::<Move>(r#"{"row":7,"col":1}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"));
        assert!(serde_json::from_str::<Move>(r#"{"row":0,"col":5}"#).is_err());
    }
}
