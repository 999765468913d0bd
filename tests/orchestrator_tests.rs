//! Turn orchestration with several rule modules sharing one board.
//!
//! These tests verify ordered fan-out: registration order is invocation
//! order, the first module with a winner decides, and modules that do not
//! govern a move contribute nothing.

use rust_grid::board::{Board, TileCategory};
use rust_grid::core::{Move, Position, Side};
use rust_grid::events::{EventKind, GameEvent};
use rust_grid::games::chess::{ChessGameBuilder, ChessModule};
use rust_grid::rules::{GameOutcome, RuleModule, TurnOrchestrator};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("rust_grid=trace"))
        .with_test_writer()
        .try_init();
}

/// Declares a winner once a number of turns have ended.
struct Countdown {
    turns_left: u32,
    winner: Side,
}

impl RuleModule for Countdown {
    fn id(&self) -> &str {
        "countdown"
    }

    fn on_register(&mut self, _board: &mut Board) {}

    fn on_turn_end(&mut self, _side: Side) {
        self.turns_left = self.turns_left.saturating_sub(1);
    }

    fn check_win_condition(&self, _board: &Board) -> Option<Side> {
        (self.turns_left == 0).then_some(self.winner)
    }
}

/// Turns a row into water and reports splashes on it.
///
/// Governs no occupants, so it must leave chess moves alone.
struct Moat {
    row: i32,
}

impl RuleModule for Moat {
    fn id(&self) -> &str {
        "moat"
    }

    fn on_register(&mut self, board: &mut Board) {
        for col in 0..board.cols() as i32 {
            let pos = Position::new(self.row, col);
            board.set_category(pos, TileCategory::Water);
            if let Some(tile) = board.tile_mut(pos) {
                tile.set_annotation("depth", 2);
            }
        }
    }
}

fn e4() -> Move {
    Move::new(Position::new(6, 4), Position::new(4, 4))
}

#[test]
fn test_end_turn_parity() {
    init_tracing();
    let mut game = ChessGameBuilder::new().build().unwrap();
    assert_eq!(game.current_side(), Side::White);

    for n in 1..=9u32 {
        game.end_turn();
        let expected = if n % 2 == 0 { Side::White } else { Side::Black };
        assert_eq!(game.current_side(), expected);
        assert_eq!(game.turns_completed(), n);
    }
}

#[test]
fn test_execute_move_does_not_change_side() {
    let mut game = ChessGameBuilder::new().build().unwrap();
    game.start_turn();
    game.execute_move(e4());
    assert_eq!(game.current_side(), Side::White);
}

#[test]
fn test_first_registered_winner_decides() {
    init_tracing();
    let mut game = TurnOrchestrator::new(Board::new(8, 8));
    game.register_module(Countdown { turns_left: 1, winner: Side::Black });
    game.register_module(ChessModule::new());

    // Chess would say White once Black's king is gone.
    game.board_mut().remove_occupant(Position::new(0, 4));
    assert_eq!(game.check_win_condition(), Some(Side::White));

    game.end_turn();
    assert_eq!(game.check_win_condition(), Some(Side::Black));
    assert!(game.outcome().is_winner(Side::Black));
}

#[test]
fn test_later_module_breaks_silence() {
    let mut game = TurnOrchestrator::new(Board::new(8, 8));
    game.register_module(ChessModule::new());
    game.register_module(Countdown { turns_left: 2, winner: Side::White });

    game.end_turn();
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    game.end_turn();
    assert_eq!(game.outcome(), GameOutcome::Won(Side::White));
}

#[test]
fn test_non_governing_module_is_inert() {
    init_tracing();
    let mut game = TurnOrchestrator::new(Board::new(8, 8));
    game.register_module(Moat { row: 4 });
    game.register_module(ChessModule::new());

    assert_eq!(game.module_ids().collect::<Vec<_>>(), vec!["moat", "chess"]);
    assert_eq!(game.get_all_moves_for_side(Side::White).len(), 20);
    assert_eq!(game.claimants(Position::new(6, 4)), vec!["chess"]);

    // Chess ignores tile categories, so the pawn lands in the moat.
    let events = game.execute_move(e4());
    assert_eq!(events.len(), 1);
    let tile = game.board().get_tile(Position::new(4, 4)).unwrap();
    assert_eq!(tile.category, TileCategory::Water);
    assert!(tile.is_occupied());
    assert_eq!(tile.annotation("depth").and_then(|v| v.as_int()), Some(2));
}

#[test]
fn test_duplicate_claim_concatenates() {
    init_tracing();
    let mut game = TurnOrchestrator::new(Board::new(8, 8));
    game.register_module(ChessModule::new());
    game.register_module(ChessModule::new());

    // Second placement overwrites the first with identical pieces.
    assert_eq!(game.board().occupied_count(), 32);
    assert_eq!(game.claimants(Position::new(6, 4)), vec!["chess", "chess"]);
    assert_eq!(
        game.get_valid_moves(Position::new(6, 4)),
        vec![
            Position::new(5, 4),
            Position::new(4, 4),
            Position::new(5, 4),
            Position::new(4, 4),
        ]
    );
    assert_eq!(game.get_all_moves_for_side(Side::Black).len(), 40);

    // Only the first module finds the pawn still at its origin.
    assert_eq!(game.execute_move(e4()).len(), 1);
}

#[test]
fn test_event_log_accumulates_in_order() {
    let mut game = ChessGameBuilder::new().build().unwrap();
    let script = [
        Move::new(Position::new(6, 4), Position::new(4, 4)),
        Move::new(Position::new(1, 3), Position::new(3, 3)),
        Move::new(Position::new(4, 4), Position::new(3, 3)),
    ];
    for mv in script {
        game.start_turn();
        game.execute_move(mv);
        game.end_turn();
    }

    let kinds: Vec<EventKind> = game.event_log().iter().map(GameEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::PieceMoved,
            EventKind::PieceMoved,
            EventKind::PieceCaptured,
            EventKind::PieceMoved,
        ]
    );

    let snapshot = game.event_log().clone();
    game.execute_move(Move::new(Position::new(0, 1), Position::new(2, 2)));
    assert_eq!(snapshot.len(), 4);
    assert_eq!(game.event_log().len(), 5);
}

#[test]
fn test_ungoverned_origin() {
    let mut game = ChessGameBuilder::new().build().unwrap();
    let before = game.board().clone();

    let events = game.execute_move(Move::new(Position::new(4, 4), Position::new(3, 4)));
    assert!(events.is_empty());
    assert!(game.event_log().is_empty());
    assert_eq!(game.board(), &before);
    assert!(game.claimants(Position::new(4, 4)).is_empty());
}

#[test]
fn test_boxed_registration() {
    let modules: Vec<Box<dyn RuleModule>> = vec![
        Box::new(Moat { row: 3 }),
        Box::new(ChessModule::new()),
    ];
    let mut game = TurnOrchestrator::new(Board::new(8, 8));
    for module in modules {
        game.register_boxed(module);
    }
    assert_eq!(game.module_count(), 2);
    assert_eq!(game.board().occupied_count(), 32);
}
