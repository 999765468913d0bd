//! Run progression between games.
//!
//! A run walks a graph of encounter nodes. Each node moves through
//! `Locked -> Available -> Active -> Completed`; completing a node unlocks its
//! successors. The layer knows nothing about chess: it consumes only the
//! winning [`Side`](crate::core::Side) reported by a finished game.
//!
//! ## Key Types
//!
//! - `MapNode`: One encounter with its status and successor ids
//! - `NodeMap`: A validated region graph and its status transitions
//! - `RunState`: The node map plus the run's current node and rewards

mod map;
mod node;
mod run;

pub use map::NodeMap;
pub use node::{MapNode, NodeKind, NodeStatus};
pub use run::{RunConfig, RunState};
