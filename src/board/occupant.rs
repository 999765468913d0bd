//! Entities that stand on tiles.
//!
//! Occupants are a tagged variant rather than a trait object: every family
//! shares the `{category, side, id}` capability set, and modules switch on the
//! variant to decide whether an occupant belongs to them. Adding a family adds
//! a variant; existing modules ignore variants they do not govern.
//!
//! Identity is the `id` string, not a memory address. Moving an occupant moves
//! the value; cloning a board clones every occupant record.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Identifier assigned by the owning module when an occupant is created.
///
/// Unique for the lifetime of one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccupantId(pub String);

impl OccupantId {
    /// Create a new occupant ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OccupantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for OccupantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entity family discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupantCategory {
    ChessPiece,
}

/// Chess piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// The standard back rank, file 0 to file 7.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
}

/// A chess piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    pub id: OccupantId,
    pub kind: PieceKind,
    pub side: Side,
    /// Set once the piece has moved. Pawns lose their two-step advance.
    pub has_moved: bool,
}

impl ChessPiece {
    /// Create an unmoved piece.
    pub fn new(id: impl Into<String>, kind: PieceKind, side: Side) -> Self {
        Self {
            id: OccupantId::new(id),
            kind,
            side,
            has_moved: false,
        }
    }

    /// Mark the piece as already moved (builder pattern).
    #[must_use]
    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// Anything that can stand on a tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Chess(ChessPiece),
}

impl Occupant {
    /// Which family this occupant belongs to.
    #[must_use]
    pub fn category(&self) -> OccupantCategory {
        match self {
            Occupant::Chess(_) => OccupantCategory::ChessPiece,
        }
    }

    /// The side this occupant plays for.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            Occupant::Chess(piece) => piece.side,
        }
    }

    #[must_use]
    pub fn id(&self) -> &OccupantId {
        match self {
            Occupant::Chess(piece) => &piece.id,
        }
    }

    /// Borrow as a chess piece, if it is one.
    #[must_use]
    pub fn as_chess(&self) -> Option<&ChessPiece> {
        match self {
            Occupant::Chess(piece) => Some(piece),
        }
    }

    /// Mutably borrow as a chess piece, if it is one.
    pub fn as_chess_mut(&mut self) -> Option<&mut ChessPiece> {
        match self {
            Occupant::Chess(piece) => Some(piece),
        }
    }
}

impl From<ChessPiece> for Occupant {
    fn from(piece: ChessPiece) -> Self {
        Occupant::Chess(piece)
    }
}
