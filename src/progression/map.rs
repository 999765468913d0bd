//! Region node graphs and their status transitions.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConfigError, ProgressionError};

use super::node::{MapNode, NodeKind, NodeStatus};

/// The node graph for one region.
///
/// Nodes keep the order they were given in. Every transition either applies
/// fully or returns an error and leaves the map as it was.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeMap {
    region_name: String,
    nodes: Vec<MapNode>,
}

impl NodeMap {
    /// Build a map, checking ids are unique, every connection resolves, and
    /// there is a boss to reach.
    pub fn new(region_name: impl Into<String>, nodes: Vec<MapNode>) -> Result<Self, ConfigError> {
        let mut ids = FxHashSet::default();
        for node in &nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(ConfigError::DuplicateNode(node.id.clone()));
            }
        }
        for node in &nodes {
            if let Some(to) = node.connections.iter().find(|to| !ids.contains(to.as_str())) {
                return Err(ConfigError::DanglingConnection {
                    from: node.id.clone(),
                    to: to.clone(),
                });
            }
        }
        if !nodes.iter().any(MapNode::is_boss) {
            return Err(ConfigError::MissingBoss);
        }

        Ok(Self {
            region_name: region_name.into(),
            nodes,
        })
    }

    /// The first region: three battles, an elite, then the boss, in a line.
    pub fn generate_region_one() -> Self {
        let layout = [
            (NodeKind::Combat, "Battle I"),
            (NodeKind::Combat, "Battle II"),
            (NodeKind::Combat, "Battle III"),
            (NodeKind::Elite, "Elite"),
            (NodeKind::Boss, "Grandmaster"),
        ];
        let count = layout.len();

        let nodes = layout
            .into_iter()
            .enumerate()
            .map(|(i, (kind, label))| {
                let status = if i == 0 {
                    NodeStatus::Available
                } else {
                    NodeStatus::Locked
                };
                let node = MapNode::new(format!("r1_n{}", i + 1), kind, label)
                    .with_status(status)
                    .at(0.5, 0.85 - 0.18 * i as f32);
                if i + 1 < count {
                    node.connect(format!("r1_n{}", i + 2))
                } else {
                    node
                }
            })
            .collect();

        Self {
            region_name: "The Chess Kingdom".to_string(),
            nodes,
        }
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&MapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn available_nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.with_status(NodeStatus::Available)
    }

    pub fn completed_nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.with_status(NodeStatus::Completed)
    }

    fn with_status(&self, status: NodeStatus) -> impl Iterator<Item = &MapNode> {
        self.nodes.iter().filter(move |n| n.status == status)
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut MapNode, ProgressionError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| ProgressionError::UnknownNode(id.to_string()))
    }

    fn transition(
        &mut self,
        id: &str,
        expected: NodeStatus,
        next: NodeStatus,
    ) -> Result<&MapNode, ProgressionError> {
        let node = self.node_mut(id)?;
        if node.status != expected {
            return Err(ProgressionError::InvalidStatus {
                id: id.to_string(),
                expected,
                actual: node.status,
            });
        }
        node.status = next;
        debug!(node = id, from = ?expected, to = ?next, "node transition");
        Ok(&*node)
    }

    /// `Available -> Active`.
    pub fn enter_node(&mut self, id: &str) -> Result<(), ProgressionError> {
        self.transition(id, NodeStatus::Available, NodeStatus::Active)
            .map(drop)
    }

    /// `Active -> Available`.
    pub fn abandon_node(&mut self, id: &str) -> Result<(), ProgressionError> {
        self.transition(id, NodeStatus::Active, NodeStatus::Available)
            .map(drop)
    }

    /// `Active -> Completed`, then every `Locked` successor becomes
    /// `Available`. Successors in any other status are left alone.
    pub fn complete_node(&mut self, id: &str) -> Result<(), ProgressionError> {
        let successors = self
            .transition(id, NodeStatus::Active, NodeStatus::Completed)?
            .connections
            .clone();

        for next in self
            .nodes
            .iter_mut()
            .filter(|n| n.status == NodeStatus::Locked && successors.contains(&n.id))
        {
            next.status = NodeStatus::Available;
            debug!(node = %next.id, "unlocked");
        }
        Ok(())
    }

    /// Every node is completed.
    pub fn is_region_complete(&self) -> bool {
        self.nodes.iter().all(|n| n.status == NodeStatus::Completed)
    }

    pub fn is_boss_defeated(&self) -> bool {
        self.nodes
            .iter()
            .any(|n| n.is_boss() && n.status == NodeStatus::Completed)
    }
}
