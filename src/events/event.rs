//! Game event types.
//!
//! Chess movement and capture are built in. Other rule families report their
//! own occurrences through `GameEvent::Custom`, tagging them with a kind
//! string and annotation-style payload so the core never has to learn about
//! them.

use serde::{Deserialize, Serialize};

use crate::board::{AnnotationValue, Annotations, Occupant};
use crate::core::Position;

/// Event discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PieceMoved,
    PieceCaptured,
    Custom(String),
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::PieceMoved => write!(f, "PieceMoved"),
            EventKind::PieceCaptured => write!(f, "PieceCaptured"),
            EventKind::Custom(kind) => write!(f, "Custom({})", kind),
        }
    }
}

/// Something that happened during move execution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An occupant was relocated. `piece` is its state after the move.
    PieceMoved {
        piece: Occupant,
        from: Position,
        to: Position,
    },

    /// An occupant was removed from the board by a capturing occupant.
    PieceCaptured {
        captured: Occupant,
        captured_by: Occupant,
        at: Position,
    },

    /// Module-defined event.
    Custom {
        kind: String,
        at: Option<Position>,
        data: Annotations,
    },
}

impl GameEvent {
    /// Create a move event.
    pub fn moved(piece: Occupant, from: Position, to: Position) -> Self {
        GameEvent::PieceMoved { piece, from, to }
    }

    /// Create a capture event.
    pub fn captured(captured: Occupant, captured_by: Occupant, at: Position) -> Self {
        GameEvent::PieceCaptured {
            captured,
            captured_by,
            at,
        }
    }

    /// Create a module-defined event with no payload.
    pub fn custom(kind: impl Into<String>) -> Self {
        GameEvent::Custom {
            kind: kind.into(),
            at: None,
            data: Annotations::default(),
        }
    }

    /// Attach a position to a custom event (builder pattern).
    ///
    /// Has no effect on built-in events, which always carry their positions.
    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        if let GameEvent::Custom { at, .. } = &mut self {
            *at = Some(pos);
        }
        self
    }

    /// Attach a payload entry to a custom event (builder pattern).
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        if let GameEvent::Custom { data, .. } = &mut self {
            data.insert(key.into(), value.into());
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::PieceMoved { .. } => EventKind::PieceMoved,
            GameEvent::PieceCaptured { .. } => EventKind::PieceCaptured,
            GameEvent::Custom { kind, .. } => EventKind::Custom(kind.clone()),
        }
    }

    /// Check if this is a capture.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, GameEvent::PieceCaptured { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ChessPiece, PieceKind};
    use crate::core::Side;

    fn pawn(id: &str, side: Side) -> Occupant {
        ChessPiece::new(id, PieceKind::Pawn, side).into()
    }

    #[test]
    fn test_kinds() {
        let moved = GameEvent::moved(pawn("a", Side::White), Position::new(6, 0), Position::new(5, 0));
        assert_eq!(moved.kind(), EventKind::PieceMoved);
        assert!(!moved.is_capture());

        let captured = GameEvent::captured(pawn("b", Side::Black), pawn("a", Side::White), Position::new(5, 1));
        assert_eq!(captured.kind(), EventKind::PieceCaptured);
        assert!(captured.is_capture());

        let custom = GameEvent::custom("mine_triggered");
        assert_eq!(custom.kind(), EventKind::Custom("mine_triggered".into()));
    }

    #[test]
    fn test_custom_builder() {
        let event = GameEvent::custom("mine_triggered")
            .at(Position::new(3, 3))
            .with_data("damage", 2);

        match event {
            GameEvent::Custom { kind, at, data } => {
                assert_eq!(kind, "mine_triggered");
                assert_eq!(at, Some(Position::new(3, 3)));
                assert_eq!(data.get("damage").and_then(|v| v.as_int()), Some(2));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_builder_ignores_builtin_events() {
        let event = GameEvent::moved(pawn("a", Side::White), Position::new(6, 0), Position::new(5, 0));
        let same = event.clone().at(Position::new(0, 0)).with_data("x", 1);
        assert_eq!(event, same);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", EventKind::PieceCaptured), "PieceCaptured");
        assert_eq!(format!("{}", EventKind::Custom("spawn".into())), "Custom(spawn)");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::captured(pawn("b", Side::Black), pawn("a", Side::White), Position::new(5, 1));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
