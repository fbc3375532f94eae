//! Figures describing one decision
//!
//! Filled in by [`MCTS`](crate::MCTS) while it searches and read back with
//! [`MCTS::get_statistics`](crate::MCTS::get_statistics).

use std::time::Duration;

/// Statistics of the latest search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Iterations run, always the configured budget
    pub iterations: usize,

    /// Wall-clock time spent searching; reported, never used as a limit
    pub total_time: Duration,

    /// Nodes in the tree, root included
    pub tree_size: usize,

    /// Deepest node reached by selection or expansion
    pub max_depth: usize,

    /// Iterations that added a node to the tree
    pub expansions: usize,

    /// Iterations whose leaf was terminal, so nothing could be added
    pub terminal_leaves: usize,

    /// Children of the root when the search ended
    pub root_children: usize,

    /// Visits of the root, equal to `iterations`
    pub root_visits: u64,

    /// Visits of the child that was chosen, 0 for a null decision
    pub chosen_visits: u64,
}

impl SearchStatistics {
    /// Creates statistics for a tree that holds only its root
    pub fn new() -> Self {
        SearchStatistics {
            tree_size: 1,
            ..Default::default()
        }
    }

    /// Fraction of root visits that went through the chosen child
    pub fn chosen_share(&self) -> f64 {
        crate::utils::win_rate(self.chosen_visits, self.root_visits)
    }

    /// Returns a one-line report of the search
    pub fn summary(&self) -> String {
        format!(
            "{} iterations in {:.3}s: {} nodes ({} expanded, {} terminal leaves), depth {}, \
             {} root children, chosen move took {}/{} visits ({:.1}%)",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.expansions,
            self.terminal_leaves,
            self.max_depth,
            self.root_children,
            self.chosen_visits,
            self.root_visits,
            100.0 * self.chosen_share()
        )
    }
}
