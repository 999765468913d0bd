//! Automated opponents.
//!
//! An opponent picks one move for a side from what the orchestrator reports as
//! legal. It never executes the move; the caller does that, so the same loop
//! drives human and automated sides.

use tracing::trace;

use crate::core::{GameRng, Move, Side};
use crate::rules::TurnOrchestrator;

/// Chooses a move for `side`.
pub trait Opponent {
    /// Returns `None` if `side` has no legal moves.
    fn choose_move(&mut self, game: &TurnOrchestrator, side: Side) -> Option<Move>;
}

/// Takes a piece whenever it can, otherwise moves at random.
///
/// Choices among equally preferred moves come from a seeded [`GameRng`], so a
/// game replayed with the same seed plays out the same way.
#[derive(Clone, Debug)]
pub struct CaptureFirstOpponent {
    rng: GameRng,
}

impl CaptureFirstOpponent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Opponent for CaptureFirstOpponent {
    fn choose_move(&mut self, game: &TurnOrchestrator, side: Side) -> Option<Move> {
        let moves = game.get_all_moves_for_side(side);
        let (captures, quiet): (Vec<Move>, Vec<Move>) = moves
            .into_iter()
            .partition(|mv| game.board().get_occupant(mv.to).is_some());

        let pool = if captures.is_empty() { quiet } else { captures };
        let choice = self.rng.choose(&pool).copied();
        if let Some(mv) = choice {
            trace!(%side, %mv, candidates = pool.len(), "opponent chose move");
        }
        choice
    }
}
