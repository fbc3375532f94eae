//! Utility functions for the MCTS algorithm
//!
//! This module contains the scoring helpers and the move-order shuffle shared
//! by the expansion and simulation policies.

use rand::{seq::SliceRandom, RngCore};

use crate::game_state::CELLS;

/// Calculates the exploitation term for UCB1
///
/// This is simply the win rate of a node.
pub fn exploitation_term(wins: u64, visits: u64) -> f64 {
    win_rate(wins, visits)
}

/// Calculates the exploration term for UCB1
///
/// Callers must only score visited children below a visited parent.
pub fn exploration_term(parent_visits: u64, child_visits: u64, exploration_constant: f64) -> f64 {
    debug_assert!(child_visits > 0 && parent_visits > 0);
    exploration_constant * ((parent_visits as f64).ln() / child_visits as f64).sqrt()
}

/// Calculates the UCB1 value for a node
///
/// ```text
/// UCB1 = wins / visits + c * sqrt(ln(parent_visits) / visits)
/// ```
pub fn ucb1_value(wins: u64, visits: u64, parent_visits: u64, exploration_constant: f64) -> f64 {
    exploitation_term(wins, visits) + exploration_term(parent_visits, visits, exploration_constant)
}

/// Safely calculates the win rate from wins and visits
///
/// Returns 0.0 if no visits have occurred.
pub fn win_rate(wins: u64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins as f64 / visits as f64
}

/// Returns every cell index in a uniformly random order
pub fn shuffled_cells(rng: &mut dyn RngCore) -> Vec<usize> {
    let mut cells: Vec<usize> = (0..CELLS).collect();
    cells.shuffle(rng);
    cells
}
