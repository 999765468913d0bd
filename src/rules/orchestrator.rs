//! Turn orchestration.
//!
//! The orchestrator is a fan-out/aggregation layer, not a referee. It never
//! rejects a move: a move no module governs simply produces no events and no
//! board change. Callers that want strict legality check `get_valid_moves`
//! first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::module::RuleModule;
use crate::board::Board;
use crate::core::{Move, Position, Side};
use crate::events::{EventLog, GameEvent};

/// Status of a game as seen by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No module reports a winner.
    InProgress,
    /// A module reported this side as the winner.
    Won(Side),
}

impl GameOutcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameOutcome::Won(winner) if *winner == side)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameOutcome::Won(_))
    }
}

/// Owns the board, sequences turns, and aggregates rule modules.
///
/// Registration order is invocation order for every hook: first registered,
/// first invoked.
pub struct TurnOrchestrator {
    board: Board,
    modules: Vec<Box<dyn RuleModule>>,
    current_side: Side,
    turns_completed: u32,
    event_log: EventLog,
}

impl TurnOrchestrator {
    /// Take ownership of a board. White moves first.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            modules: Vec::new(),
            current_side: Side::White,
            turns_completed: 0,
            event_log: EventLog::new(),
        }
    }

    /// Append a module and immediately run its `on_register` hook.
    pub fn register_module<M>(&mut self, module: M)
    where
        M: RuleModule + 'static,
    {
        self.register_boxed(Box::new(module));
    }

    /// Append an already boxed module and run its `on_register` hook.
    pub fn register_boxed(&mut self, mut module: Box<dyn RuleModule>) {
        module.on_register(&mut self.board);
        tracing::debug!(
            module = module.id(),
            position = self.modules.len(),
            occupants = self.board.occupied_count(),
            "registered rule module"
        );
        self.modules.push(module);
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setup and tests.
    ///
    /// Presentation layers read through `board()` and mutate only via
    /// `execute_move`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Number of `end_turn` calls so far.
    #[must_use]
    pub fn turns_completed(&self) -> u32 {
        self.turns_completed
    }

    /// Full, ordered event history.
    #[must_use]
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Registered module ids, in registration order.
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id())
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    // === Turn Lifecycle ===

    /// Notify every module that a turn is beginning for the current side.
    pub fn start_turn(&mut self) {
        let side = self.current_side;
        tracing::trace!(%side, "turn start");
        for module in &mut self.modules {
            module.on_turn_start(side);
        }
    }

    /// Run a move through every module and log the events produced.
    ///
    /// Returns the concatenated events of this move, in registration order.
    pub fn execute_move(&mut self, mv: Move) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for module in &mut self.modules {
            events.extend(module.on_move(&mut self.board, mv));
        }

        tracing::debug!(%mv, side = %self.current_side, events = events.len(), "executed move");
        self.event_log.extend(events.iter().cloned());
        events
    }

    /// Notify every module that the current side's turn is ending, then
    /// hand the turn to the other side.
    ///
    /// Does not call `on_turn_start`; callers invoke `start_turn` when the
    /// next turn is considered to begin.
    pub fn end_turn(&mut self) {
        let side = self.current_side;
        for module in &mut self.modules {
            module.on_turn_end(side);
        }
        self.current_side = side.opponent();
        self.turns_completed += 1;
        tracing::trace!(ended = %side, next = %self.current_side, "turn end");
    }

    // === Queries ===

    /// Legal destinations from `pos`, concatenated across modules.
    ///
    /// Not deduplicated. If more than one module claims `pos` (a
    /// misconfiguration) destinations from all of them appear and a warning
    /// is logged.
    #[must_use]
    pub fn get_valid_moves(&self, pos: Position) -> Vec<Position> {
        let mut moves = Vec::new();
        let mut claimants: SmallVec<[&str; 2]> = SmallVec::new();

        for module in &self.modules {
            let found = module.get_valid_moves(&self.board, pos);
            if !found.is_empty() {
                claimants.push(module.id());
                moves.extend(found);
            }
        }

        if claimants.len() > 1 {
            tracing::warn!(%pos, ?claimants, "multiple rule modules claim the same position");
        }
        moves
    }

    /// Ids of modules reporting at least one destination from `pos`.
    ///
    /// More than one entry means two modules govern the same occupant.
    #[must_use]
    pub fn claimants(&self, pos: Position) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|m| !m.get_valid_moves(&self.board, pos).is_empty())
            .map(|m| m.id())
            .collect()
    }

    /// Every legal move for `side`, concatenated across modules.
    #[must_use]
    pub fn get_all_moves_for_side(&self, side: Side) -> Vec<Move> {
        self.modules
            .iter()
            .flat_map(|m| m.get_all_moves_for_side(&self.board, side))
            .collect()
    }

    /// The first winner reported, in registration order.
    #[must_use]
    pub fn check_win_condition(&self) -> Option<Side> {
        let winner = self
            .modules
            .iter()
            .find_map(|m| m.check_win_condition(&self.board));
        if let Some(side) = winner {
            tracing::debug!(winner = %side, "win condition met");
        }
        winner
    }

    /// `check_win_condition` as a `GameOutcome`.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.check_win_condition()
            .map_or(GameOutcome::InProgress, GameOutcome::Won)
    }
}

impl std::fmt::Debug for TurnOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnOrchestrator")
            .field("modules", &self.module_ids().collect::<Vec<_>>())
            .field("current_side", &self.current_side)
            .field("turns_completed", &self.turns_completed)
            .field("events", &self.event_log.len())
            .finish_non_exhaustive()
    }
}
