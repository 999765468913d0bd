//! Core engine types: positions, moves, sides, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Rule modules build on these rather than defining their own coordinates.

pub mod position;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Move, Position};
pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, ProgressionError};
