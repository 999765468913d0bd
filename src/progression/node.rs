//! Node records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where a node is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Not reachable yet.
    #[default]
    Locked,
    /// Can be entered.
    Available,
    /// A game is being played here.
    Active,
    Completed,
}

/// Kind of encounter a node holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Combat,
    Elite,
    Boss,
    Reward,
    Rest,
    Shop,
    Mystery,
    Gamble,
}

/// A single encounter on the map.
///
/// `x` and `y` are layout hints in `0.0..=1.0` for whatever draws the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub label: String,
    pub x: f32,
    pub y: f32,
    /// Ids of the nodes unlocked when this one completes.
    pub connections: SmallVec<[String; 2]>,
}

impl MapNode {
    /// A locked node at the origin with no successors.
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            status: NodeStatus::Locked,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            connections: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Add a successor (builder pattern).
    #[must_use]
    pub fn connect(mut self, to: impl Into<String>) -> Self {
        self.connections.push(to.into());
        self
    }

    pub fn is_boss(&self) -> bool {
        self.kind == NodeKind::Boss
    }
}
