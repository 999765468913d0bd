//! Game configuration.
//!
//! Board dimensions are fixed for the lifetime of a game instance, so they are
//! configured once up front and validated before any board is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board dimensions for one game instance.
///
/// `Default` is the standard 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (immutable after construction).
    pub rows: usize,
    /// Number of columns (immutable after construction).
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { rows: 8, cols: 8 }
    }
}

impl GameConfig {
    /// Create a configuration with the given dimensions.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Set the row count (builder pattern).
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the column count (builder pattern).
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Check the dimensions describe a usable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tile_count().is_none() {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Total number of tiles, or `None` if it overflows `usize`.
    #[must_use]
    pub const fn tile_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 8);
        assert_eq!(config.tile_count(), Some(64));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default().with_rows(4).with_cols(6);
        assert_eq!(config, GameConfig::new(4, 6));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(
            GameConfig::new(0, 5).validate(),
            Err(ConfigError::EmptyBoard { rows: 0, cols: 5 })
        );
        assert!(GameConfig::new(3, 0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(10, 12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let config = GameConfig::new(usize::MAX, 2);
        assert_eq!(config.tile_count(), None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge { rows: usize::MAX, cols: 2 })
        );
    }
}
