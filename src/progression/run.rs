//! Per-run state carried between games.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ProgressionError, Side};

use super::map::NodeMap;

/// Tunables for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Gold awarded for each completed node.
    pub gold_per_node: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { gold_per_node: 10 }
    }
}

impl RunConfig {
    #[must_use]
    pub fn with_gold_per_node(mut self, gold: u32) -> Self {
        self.gold_per_node = gold;
        self
    }
}

/// Everything that persists across the games of one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    node_map: NodeMap,
    current_node: Option<String>,
    gold: u32,
    nodes_completed: u32,
    config: RunConfig,
}

impl RunState {
    pub fn new(node_map: NodeMap, config: RunConfig) -> Self {
        Self {
            node_map,
            current_node: None,
            gold: 0,
            nodes_completed: 0,
            config,
        }
    }

    /// A fresh run through region one.
    pub fn new_run() -> Self {
        Self::new(NodeMap::generate_region_one(), RunConfig::default())
    }

    pub fn node_map(&self) -> &NodeMap {
        &self.node_map
    }

    pub fn current_node(&self) -> Option<&str> {
        self.current_node.as_deref()
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn nodes_completed(&self) -> u32 {
        self.nodes_completed
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Start the encounter at `id`.
    ///
    /// The node must be available and no other node may be in progress.
    pub fn enter_node(&mut self, id: &str) -> Result<(), ProgressionError> {
        if let Some(current) = &self.current_node {
            return Err(ProgressionError::NodeAlreadyActive {
                current: current.clone(),
            });
        }
        self.node_map.enter_node(id)?;
        self.current_node = Some(id.to_string());
        Ok(())
    }

    /// The current encounter was won.
    pub fn complete_current_node(&mut self) -> Result<(), ProgressionError> {
        let id = self
            .current_node
            .as_deref()
            .ok_or(ProgressionError::NoActiveNode)?;
        self.node_map.complete_node(id)?;

        self.gold += self.config.gold_per_node;
        self.nodes_completed += 1;
        self.current_node = None;
        info!(gold = self.gold, completed = self.nodes_completed, "node cleared");
        Ok(())
    }

    /// The current encounter was lost or left. The node can be entered again.
    pub fn abandon_current_node(&mut self) -> Result<(), ProgressionError> {
        let id = self
            .current_node
            .as_deref()
            .ok_or(ProgressionError::NoActiveNode)?;
        self.node_map.abandon_node(id)?;
        self.current_node = None;
        Ok(())
    }

    /// Apply a finished game's result to the current node.
    ///
    /// `winner` is what the game's win check reported. `None` means the game
    /// is still going and nothing changes.
    pub fn record_outcome(
        &mut self,
        winner: Option<Side>,
        player_side: Side,
    ) -> Result<(), ProgressionError> {
        match winner {
            None => Ok(()),
            Some(side) if side == player_side => self.complete_current_node(),
            Some(_) => self.abandon_current_node(),
        }
    }

    /// The boss has been beaten.
    pub fn is_run_complete(&self) -> bool {
        self.node_map.is_boss_defeated()
    }
}
