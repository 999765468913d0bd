//! The board: a fixed-size grid of tiles.
//!
//! Tiles are stored row-major in an `im::Vector`, so cloning a board for a
//! snapshot shares structure with the original and costs O(1).
//!
//! Every accessor is total. Out-of-bounds positions read as `None`, writes to
//! them are ignored (or report `false`), and nothing panics.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::occupant::Occupant;
use super::tile::{Tile, TileCategory};
use crate::core::{ConfigError, GameConfig, Position};

/// Fixed-size 2D grid of tiles.
///
/// The board exclusively owns every tile and, transitively, every occupant.
///
/// Deserializing checks that the tile count matches the dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vector<Tile>,
}

/// Serialized form of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    tiles: Vector<Tile>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = GameConfig::new(raw.rows, raw.cols)
            .tile_count()
            .ok_or(ConfigError::TooLarge {
                rows: raw.rows,
                cols: raw.cols,
            })?;
        if raw.tiles.len() != expected {
            return Err(ConfigError::TileCountMismatch {
                rows: raw.rows,
                cols: raw.cols,
                expected,
                actual: raw.tiles.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            tiles: raw.tiles,
        })
    }
}

impl Board {
    /// Create a board of normal, empty, revealed tiles.
    ///
    /// A zero dimension yields a board on which every position is out of
    /// bounds. So do dimensions whose tile count overflows `usize`; use
    /// [`Board::from_config`] to have those rejected instead.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let Some(count) = rows.checked_mul(cols) else {
            return Self::new(0, 0);
        };
        Self {
            rows,
            cols,
            tiles: std::iter::repeat(Tile::default()).take(count).collect(),
        }
    }

    /// Create a board from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.cols))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Iterate every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.tiles.len()).map(|i| self.position_of(i))
    }

    // === Tiles ===

    #[must_use]
    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|i| self.tiles.get(i))
    }

    /// Mutable tile access for annotations and visibility.
    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let i = self.index(pos)?;
        self.tiles.get_mut(i)
    }

    /// Set a tile's category. Ignored out of bounds.
    pub fn set_category(&mut self, pos: Position, category: TileCategory) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.category = category;
        }
    }

    // === Occupants ===

    #[must_use]
    pub fn get_occupant(&self, pos: Position) -> Option<&Occupant> {
        self.get_tile(pos).and_then(|tile| tile.occupant.as_ref())
    }

    /// Mutable occupant access, for in-place flag updates.
    pub fn occupant_mut(&mut self, pos: Position) -> Option<&mut Occupant> {
        self.tile_mut(pos).and_then(|tile| tile.occupant.as_mut())
    }

    /// Place an occupant, silently replacing any existing one.
    ///
    /// Returns `false` iff `pos` is out of bounds.
    pub fn set_occupant(&mut self, pos: Position, occupant: Occupant) -> bool {
        match self.tile_mut(pos) {
            Some(tile) => {
                tile.occupant = Some(occupant);
                true
            }
            None => false,
        }
    }

    /// Take the occupant off a tile, returning it.
    pub fn remove_occupant(&mut self, pos: Position) -> Option<Occupant> {
        self.tile_mut(pos).and_then(|tile| tile.occupant.take())
    }

    /// Relocate the occupant at `from` to `to`.
    ///
    /// Returns whatever previously stood on `to` (the capture target). This is
    /// the only place a capture-by-overwrite happens. Does nothing and returns
    /// `None` if `from` is empty, either position is out of bounds, or
    /// `from == to`.
    pub fn move_occupant(&mut self, from: Position, to: Position) -> Option<Occupant> {
        let (fi, ti) = (self.index(from)?, self.index(to)?);
        if fi == ti {
            return None;
        }
        let moving = self.tiles.get_mut(fi).and_then(|tile| tile.occupant.take())?;
        self.tiles
            .get_mut(ti)
            .and_then(|tile| tile.occupant.replace(moving))
    }

    // === Queries ===

    /// All occupants matching `predicate`, in row-major order.
    pub fn find_occupants<F>(&self, predicate: F) -> Vec<(&Occupant, Position)>
    where
        F: Fn(&Occupant, Position) -> bool,
    {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(i, tile)| {
                let occupant = tile.occupant.as_ref()?;
                let pos = self.position_of(i);
                predicate(occupant, pos).then_some((occupant, pos))
            })
            .collect()
    }

    /// All tiles matching `predicate`, in row-major order.
    pub fn find_tiles<F>(&self, predicate: F) -> Vec<(&Tile, Position)>
    where
        F: Fn(&Tile, Position) -> bool,
    {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(i, tile)| {
                let pos = self.position_of(i);
                predicate(tile, pos).then_some((tile, pos))
            })
            .collect()
    }

    /// Number of tiles holding an occupant.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_occupied()).count()
    }
}
