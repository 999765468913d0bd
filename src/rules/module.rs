//! The rule module contract.

use crate::board::Board;
use crate::core::{Move, Position, Side};
use crate::events::GameEvent;

/// A pluggable game mechanic.
///
/// Only `id` and `on_register` are required. Every other hook has a no-op
/// default, so a module implements just the parts of the turn it cares about.
///
/// ## Implementation Notes
///
/// - Hooks are invoked by `TurnOrchestrator` only, never by other modules.
/// - A module must check that it governs a position or occupant before acting.
///   `get_valid_moves` returns empty and `on_move` returns empty without
///   touching the board when it does not.
/// - `get_valid_moves`, `check_win_condition`, and `get_all_moves_for_side`
///   are pure queries.
///
/// ## Example
///
/// ```
/// use rust_grid::board::{Board, TileCategory};
/// use rust_grid::core::Position;
/// use rust_grid::rules::{RuleModule, TurnOrchestrator};
///
/// /// Floods the centre of the board and does nothing else.
/// struct Lake;
///
/// impl RuleModule for Lake {
///     fn id(&self) -> &str {
///         "lake"
///     }
///
///     fn on_register(&mut self, board: &mut Board) {
///         board.set_category(Position::new(3, 3), TileCategory::Water);
///     }
/// }
///
/// let mut game = TurnOrchestrator::new(Board::new(8, 8));
/// game.register_module(Lake);
/// assert!(!game.board().get_tile(Position::new(3, 3)).unwrap().is_passable());
/// ```
pub trait RuleModule {
    /// Identifier for diagnostics. Unique per module instance.
    fn id(&self) -> &str;

    /// Set up this module's initial board state.
    ///
    /// Called exactly once, at registration, before any other hook.
    fn on_register(&mut self, board: &mut Board);

    /// A turn is beginning for `side`.
    fn on_turn_start(&mut self, _side: Side) {}

    /// Legal destinations for this module's occupant at `pos`.
    ///
    /// Returns empty if this module does not govern `pos`.
    fn get_valid_moves(&self, _board: &Board, _pos: Position) -> Vec<Position> {
        Vec::new()
    }

    /// Realize `mv` on the board if this module governs `mv.from`.
    ///
    /// Returns the events produced, in chronological order.
    fn on_move(&mut self, _board: &mut Board, _mv: Move) -> Vec<GameEvent> {
        Vec::new()
    }

    /// A turn is ending for `side`.
    fn on_turn_end(&mut self, _side: Side) {}

    /// The winning side, if this module's win rule is satisfied.
    fn check_win_condition(&self, _board: &Board) -> Option<Side> {
        None
    }

    /// Every legal move for every occupant this module governs on `side`.
    fn get_all_moves_for_side(&self, _board: &Board, _side: Side) -> Vec<Move> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl RuleModule for Inert {
        fn id(&self) -> &str {
            "inert"
        }

        fn on_register(&mut self, _board: &mut Board) {}
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let mut board = Board::new(4, 4);
        let before = board.clone();
        let mut module = Inert;

        module.on_register(&mut board);
        module.on_turn_start(Side::White);
        module.on_turn_end(Side::White);

        let mv = Move::new(Position::new(0, 0), Position::new(1, 1));
        assert!(module.get_valid_moves(&board, Position::new(0, 0)).is_empty());
        assert!(module.on_move(&mut board, mv).is_empty());
        assert!(module.check_win_condition(&board).is_none());
        assert!(module.get_all_moves_for_side(&board, Side::Black).is_empty());
        assert_eq!(board, before);
    }
}
