//! Chess as a rule module.
//!
//! Full piece placement, per-kind move generation, capture, and a
//! king-capture win condition. This is not a chess engine: there is no check,
//! checkmate, castling, en passant, or promotion. A king may walk into an
//! attacked square; the game ends when a king is actually taken.
//!
//! White starts on the two highest-numbered rows and moves toward row 0;
//! Black starts on rows 0 and 1 and moves toward the last row.
//!
//! ## Example
//!
//! ```
//! use rust_grid::core::{Move, Position, Side};
//! use rust_grid::games::chess::ChessGameBuilder;
//!
//! let mut game = ChessGameBuilder::new().build().unwrap();
//! assert_eq!(game.get_all_moves_for_side(Side::White).len(), 20);
//!
//! let events = game.execute_move(Move::new(Position::new(6, 4), Position::new(4, 4)));
//! assert_eq!(events.len(), 1);
//! game.end_turn();
//! assert_eq!(game.current_side(), Side::Black);
//! ```

mod builder;
mod module;
pub mod movegen;

pub use builder::ChessGameBuilder;
pub use module::ChessModule;
