//! Error types for the fallible edges of the engine.
//!
//! The board and turn orchestration never fail: out-of-bounds reads return
//! `None`, unknown moves produce no events. Errors exist only where a caller
//! hands over structure that must be coherent up front (configuration, node
//! graphs) and for progression transitions requested from the wrong status.

use crate::progression::NodeStatus;

/// Invalid game or node-map configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board {rows}x{cols} is too small for the standard chess array (need at least {min_rows}x{min_cols})")]
    BoardTooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("board {rows}x{cols} has more tiles than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("board {rows}x{cols} needs {expected} tiles, got {actual}")]
    TileCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("node '{from}' connects to unknown node '{to}'")]
    DanglingConnection { from: String, to: String },

    #[error("node map has no boss node")]
    MissingBoss,
}

/// A progression transition that could not be applied.
///
/// The node map is unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("node '{id}' is {actual:?}, expected {expected:?}")]
    InvalidStatus {
        id: String,
        expected: NodeStatus,
        actual: NodeStatus,
    },

    #[error("no node is currently active")]
    NoActiveNode,

    #[error("node '{current}' is still active")]
    NodeAlreadyActive { current: String },
}
