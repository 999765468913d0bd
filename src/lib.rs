//! # rust-grid
//!
//! A turn-based grid game engine with pluggable rule modules.
//!
//! ## Design Principles
//!
//! 1. **Board Is Storage**: The board holds tiles and occupants and answers
//!    queries. It has no idea what chess is.
//!
//! 2. **Rules Are Modules**: Each mechanic implements `RuleModule`. Modules
//!    never call each other; they share the board and return events.
//!
//! 3. **Soft Failures**: Out-of-bounds reads, unknown moves, and moves nobody
//!    governs produce `None` or nothing. Only configuration and progression
//!    transitions return errors.
//!
//! ## Architecture
//!
//! - **Ordered Fan-Out**: `TurnOrchestrator` calls every module in
//!   registration order and concatenates what they return. The first module
//!   with a winner decides the game.
//!
//! - **Persistent Data Structures**: Board tiles and the event log live in
//!   `im` vectors, so snapshotting a game is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Positions, moves, sides, RNG, configuration, errors
//! - `board`: Tiles, occupants, the grid
//! - `events`: Game events and the event log
//! - `rules`: RuleModule trait and the turn orchestrator
//! - `games`: Concrete rule modules (chess)
//! - `opponent`: Automated move selection
//! - `progression`: Node maps and run state between games

pub mod core;
pub mod board;
pub mod events;
pub mod rules;
pub mod games;
pub mod opponent;
pub mod progression;

// Re-export commonly used types
pub use crate::core::{
    Move, Position, Side, SideMap,
    GameRng,
    GameConfig, ConfigError, ProgressionError,
};

pub use crate::board::{
    AnnotationValue, Annotations, Board, ChessPiece, Occupant,
    OccupantCategory, OccupantId, PieceKind, Tile, TileCategory,
};

pub use crate::events::{EventKind, EventLog, GameEvent};

pub use crate::rules::{GameOutcome, RuleModule, TurnOrchestrator};

pub use crate::games::chess::{ChessGameBuilder, ChessModule};

pub use crate::opponent::{CaptureFirstOpponent, Opponent};

pub use crate::progression::{MapNode, NodeKind, NodeMap, NodeStatus, RunConfig, RunState};
