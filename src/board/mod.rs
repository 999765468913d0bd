//! Board storage: tiles, occupants, and the grid that owns them.
//!
//! The board is pure storage with create/read/update/delete and scan queries.
//! It knows nothing about any particular game's rules; rule modules interpret
//! what sits on it.
//!
//! ## Key Components
//!
//! - [`Board`]: fixed-size 2D grid of tiles, row-major
//! - [`Tile`]: category, optional occupant, visibility, annotations
//! - [`Occupant`]: tagged variant over entity families (chess pieces today)
//! - [`AnnotationValue`]: side-channel data modules attach to tiles
//!
//! ## Example
//!
//! ```
//! use rust_grid::board::{Board, ChessPiece, Occupant, PieceKind};
//! use rust_grid::core::{Position, Side};
//!
//! let mut board = Board::new(8, 8);
//! let pawn = ChessPiece::new("p0", PieceKind::Pawn, Side::White);
//! assert!(board.set_occupant(Position::new(6, 0), pawn.into()));
//!
//! let captured = board.move_occupant(Position::new(6, 0), Position::new(5, 0));
//! assert!(captured.is_none());
//! assert!(board.get_occupant(Position::new(5, 0)).is_some());
//! ```

mod annotation;
mod grid;
mod occupant;
mod tile;

pub use annotation::{AnnotationValue, Annotations};
pub use grid::Board;
pub use occupant::{ChessPiece, Occupant, OccupantCategory, OccupantId, PieceKind};
pub use tile::{Tile, TileCategory};
