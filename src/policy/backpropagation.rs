//! Backpropagation policies for the MCTS algorithm
//!
//! Backpropagation policies determine how to update node statistics
//! after a simulation.

use crate::{
    game_state::{Board, Color},
    tree::MCTSNode,
};

/// Trait for policies that backpropagate simulation results
pub trait BackpropagationPolicy<B: Board>: Send + Sync {
    /// Updates statistics for one node on the path
    ///
    /// `root_player` is the side to move at the root of the search.
    fn update_stats(&self, node: &mut MCTSNode<B>, winner: Color, root_player: Color);
}

/// Credits wins from the point of view of the search root
///
/// Every node on the path counts a win whenever the rollout winner is the
/// player to move at the root, regardless of whose turn it is at the node.
#[derive(Debug, Clone)]
pub struct SearchRootPolicy;

impl SearchRootPolicy {
    /// Creates a new search-root policy
    pub fn new() -> Self {
        SearchRootPolicy
    }
}

impl Default for SearchRootPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> BackpropagationPolicy<B> for SearchRootPolicy {
    fn update_stats(&self, node: &mut MCTSNode<B>, winner: Color, root_player: Color) {
        node.visits += 1;
        if winner == root_player {
            node.wins += 1;
        }
    }
}

/// Credits wins to the color that played into each node
///
/// This is the alternating-perspective rule: a node's win rate is measured
/// for the player who chose it from its parent.
#[derive(Debug, Clone)]
pub struct NodeMoverPolicy;

impl NodeMoverPolicy {
    /// Creates a new node-mover policy
    pub fn new() -> Self {
        NodeMoverPolicy
    }
}

impl Default for NodeMoverPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> BackpropagationPolicy<B> for NodeMoverPolicy {
    fn update_stats(&self, node: &mut MCTSNode<B>, winner: Color, _root_player: Color) {
        node.visits += 1;
        if winner == node.state.side_to_move().opponent() {
            node.wins += 1;
        }
    }
}
