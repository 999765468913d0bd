//! A single addressable cell.

use serde::{Deserialize, Serialize};

use super::annotation::{AnnotationValue, Annotations};
use super::occupant::Occupant;

/// Tile category tag.
///
/// Exactly `Water` and `Block` are impassable; everything else is passable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    #[default]
    Normal,
    Mine,
    Slot,
    Water,
    Block,
    /// Category introduced by a rule module the engine does not know about.
    Custom(String),
}

impl TileCategory {
    #[must_use]
    pub fn is_passable(&self) -> bool {
        !matches!(self, TileCategory::Water | TileCategory::Block)
    }
}

/// One cell of a board.
///
/// `Clone` is a deep copy: occupant record and annotations included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub category: TileCategory,
    pub occupant: Option<Occupant>,
    /// Visibility flag. Tiles start revealed (no fog of war by default).
    pub revealed: bool,
    pub annotations: Annotations,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileCategory::Normal)
    }
}

impl Tile {
    /// Create an empty, revealed tile of the given category.
    #[must_use]
    pub fn new(category: TileCategory) -> Self {
        Self {
            category,
            occupant: None,
            revealed: true,
            annotations: Annotations::default(),
        }
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn is_passable(&self) -> bool {
        self.category.is_passable()
    }

    /// Read an annotation.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&AnnotationValue> {
        self.annotations.get(key)
    }

    /// Write an annotation, returning the previous value.
    pub fn set_annotation(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AnnotationValue>,
    ) -> Option<AnnotationValue> {
        self.annotations.insert(key.into(), value.into())
    }

    pub fn remove_annotation(&mut self, key: &str) -> Option<AnnotationValue> {
        self.annotations.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ChessPiece, PieceKind};
    use crate::core::Side;

    #[test]
    fn test_default_tile() {
        let tile = Tile::default();
        assert_eq!(tile.category, TileCategory::Normal);
        assert!(tile.occupant.is_none());
        assert!(tile.revealed);
        assert!(!tile.is_occupied());
        assert!(tile.annotations.is_empty());
    }

    #[test]
    fn test_passability() {
        assert!(Tile::new(TileCategory::Normal).is_passable());
        assert!(Tile::new(TileCategory::Mine).is_passable());
        assert!(Tile::new(TileCategory::Slot).is_passable());
        assert!(Tile::new(TileCategory::Custom("lava".into())).is_passable());
        assert!(!Tile::new(TileCategory::Water).is_passable());
        assert!(!Tile::new(TileCategory::Block).is_passable());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut tile = Tile::new(TileCategory::Mine);
        tile.occupant = Some(ChessPiece::new("p", PieceKind::Pawn, Side::White).into());
        tile.revealed = false;
        tile.set_annotation("count", 3);

        let mut clone = tile.clone();
        assert_eq!(clone, tile);

        clone.set_annotation("count", 4);
        clone.occupant.as_mut().and_then(|o| o.as_chess_mut()).unwrap().has_moved = true;

        assert_eq!(tile.annotation("count").and_then(|v| v.as_int()), Some(3));
        assert!(!tile.occupant.as_ref().and_then(|o| o.as_chess()).unwrap().has_moved);
    }

    #[test]
    fn test_annotations() {
        let mut tile = Tile::default();
        assert!(tile.set_annotation("flag", true).is_none());
        assert_eq!(tile.set_annotation("flag", false), Some(AnnotationValue::Bool(true)));
        assert_eq!(tile.remove_annotation("flag"), Some(AnnotationValue::Bool(false)));
        assert!(tile.annotation("flag").is_none());
    }
}
