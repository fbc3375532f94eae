//! Configuration options for the MCTS algorithm
//!
//! This module defines the parameters that control a single decision: the
//! iteration budget, the exploration constant, and how rollout outcomes are
//! credited during backpropagation.

use std::str::FromStr;

use crate::{MCTSError, Result};

/// Whose point of view a rollout win is credited from
///
/// Every node on the backpropagated path receives one visit per iteration.
/// This setting decides which winner also earns the node a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewardPerspective {
    /// Credit a win to every node on the path when the rollout winner is the
    /// side to move at the root of the search.
    ///
    /// Each node's UCB score therefore measures how good its subtree is for
    /// the searching player, at every depth.
    #[default]
    SearchRoot,

    /// Credit a win to a node when the rollout winner is the color that
    /// played into that node.
    ///
    /// This is the usual alternating-perspective rule where every parent picks
    /// the child that is best for the player choosing between them.
    NodeMover,
}

impl FromStr for RewardPerspective {
    type Err = MCTSError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "root" | "search_root" => Ok(RewardPerspective::SearchRoot),
            "mover" | "node_mover" => Ok(RewardPerspective::NodeMover),
            other => Err(MCTSError::InvalidProperty {
                key: "reward".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for the MCTS algorithm
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use nogo_mcts::{config::RewardPerspective, MCTSConfig};
///
/// let config = MCTSConfig::default()
///     .with_exploration_constant(1.0)
///     .with_max_iterations(500)
///     .with_reward_perspective(RewardPerspective::NodeMover);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MCTSConfig {
    /// Exploration constant for UCB1
    ///
    /// Higher values favor exploration of less-visited nodes.
    /// The default is sqrt(2).
    pub exploration_constant: f64,

    /// Number of select, expand, simulate, backpropagate cycles per decision
    ///
    /// This is the only budget; there is no time limit.
    pub max_iterations: usize,

    /// How rollout winners are credited to path nodes
    pub reward_perspective: RewardPerspective,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        MCTSConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            max_iterations: 200,
            reward_perspective: RewardPerspective::SearchRoot,
        }
    }
}

impl MCTSConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets how rollout winners are credited
    pub fn with_reward_perspective(mut self, perspective: RewardPerspective) -> Self {
        self.reward_perspective = perspective;
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "exploration constant must be a finite non-negative number, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}
