//! Selection policies for the MCTS algorithm
//!
//! Selection policies decide which child to descend into while the current
//! node is fully expanded, balancing exploration and exploitation.

use std::f64;

use crate::{
    game_state::Board,
    tree::{NodeId, SearchTree},
};

/// Trait for policies that select nodes to explore
pub trait SelectionPolicy<B: Board>: Send + Sync {
    /// Picks the child of `node` to descend into
    ///
    /// Returns `None` if `node` has no children.
    fn select_child(&self, tree: &SearchTree<B>, node: NodeId) -> Option<NodeId>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// This is the classic selection policy for MCTS:
///
/// ```text
/// UCB1 = wins / visits + exploration_constant * sqrt(ln(parent_visits) / visits)
/// ```
///
/// Ties go to the child created first.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }

    /// Calculates the UCB1 value for a child
    ///
    /// Both visit counts must be positive.
    pub fn ucb1_value(&self, child_wins: u64, child_visits: u64, parent_visits: u64) -> f64 {
        crate::utils::ucb1_value(
            child_wins,
            child_visits,
            parent_visits,
            self.exploration_constant,
        )
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(f64::consts::SQRT_2)
    }
}

impl<B: Board> SelectionPolicy<B> for UCB1Policy {
    fn select_child(&self, tree: &SearchTree<B>, node: NodeId) -> Option<NodeId> {
        let parent_visits = tree[node].visits;
        let mut best: Option<(NodeId, f64)> = None;

        for &child in &tree[node].children {
            let stats = &tree[child];
            let score = self.ucb1_value(stats.wins, stats.visits, parent_visits);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child, score)),
            }
        }

        best.map(|(child, _)| child)
    }
}
