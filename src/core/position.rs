//! Grid coordinates and moves.
//!
//! A `Position` is a plain `(row, col)` pair. Coordinates are signed so that
//! move generators can step off the edge and ask the board whether the result
//! is in bounds, instead of guarding every subtraction.
//!
//! ```
//! use rust_grid::core::{Move, Position};
//!
//! let from = Position::new(6, 4);
//! let to = from.offset(-2, 0);
//! assert_eq!(to, Position::new(4, 4));
//!
//! let mv = Move::new(from, to);
//! assert_eq!(format!("{}", mv), "(6, 4) -> (4, 4)");
//! ```

use serde::{Deserialize, Serialize};

/// A cell address on a board.
///
/// Validity depends on the owning board: `0 <= row < rows` and `0 <= col < cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by `(dr, dc)`. May land out of bounds.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A request to relocate whatever stands on `from` to `to`.
///
/// Moves carry no legality guarantee. Callers consult
/// `TurnOrchestrator::get_valid_moves` before submitting one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.offset(1, -1), Position::new(4, 2));
        assert_eq!(pos.offset(-4, 0), Position::new(-1, 3));
    }

    #[test]
    fn test_from_tuple() {
        let pos: Position = (2, 5).into();
        assert_eq!(pos, Position::new(2, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(0, 7)), "(0, 7)");
        let mv = Move::new(Position::new(1, 1), Position::new(2, 2));
        assert_eq!(format!("{}", mv), "(1, 1) -> (2, 2)");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(Position::new(6, 4), Position::new(4, 4));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
