//! Chess game construction.

use crate::board::Board;
use crate::core::{ConfigError, GameConfig};
use crate::rules::TurnOrchestrator;

use super::ChessModule;

/// Builds a [`TurnOrchestrator`] with a [`ChessModule`] registered.
///
/// The board must be at least 8 columns wide (one file per back-rank piece)
/// and 4 rows tall so the two arrays do not overlap.
#[derive(Clone, Debug, Default)]
pub struct ChessGameBuilder {
    config: GameConfig,
}

impl ChessGameBuilder {
    pub const MIN_ROWS: usize = 4;
    pub const MIN_COLS: usize = 8;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.config = self.config.with_rows(rows);
        self
    }

    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.config = self.config.with_cols(cols);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<TurnOrchestrator, ConfigError> {
        let board = Board::from_config(&self.config)?;
        if board.rows() < Self::MIN_ROWS || board.cols() < Self::MIN_COLS {
            return Err(ConfigError::BoardTooSmall {
                rows: board.rows(),
                cols: board.cols(),
                min_rows: Self::MIN_ROWS,
                min_cols: Self::MIN_COLS,
            });
        }

        let mut game = TurnOrchestrator::new(board);
        game.register_module(ChessModule::new());
        Ok(game)
    }
}
