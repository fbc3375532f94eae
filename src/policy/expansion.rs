//! Expansion policies determine which untried move becomes a new child
//! of a leaf node.

use rand::RngCore;

use crate::{
    game_state::Board,
    tree::{NodeId, SearchTree},
    utils::shuffled_cells,
};

/// Trait for policies that grow the tree by one node
pub trait ExpansionPolicy<B: Board>: Send + Sync {
    /// Adds one child to `node` and returns it
    ///
    /// Returns `node` itself when no untried legal move exists.
    fn expand(&self, tree: &mut SearchTree<B>, node: NodeId, rng: &mut dyn RngCore) -> NodeId;
}

/// Random expansion policy
///
/// Shuffles all cells and expands the first one that is legal and not yet
/// claimed by an existing child, so every untried move is equally likely.
#[derive(Debug, Clone)]
pub struct RandomExpansionPolicy;

impl RandomExpansionPolicy {
    /// Creates a new random expansion policy
    pub fn new() -> Self {
        RandomExpansionPolicy
    }
}

impl Default for RandomExpansionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> ExpansionPolicy<B> for RandomExpansionPolicy {
    fn expand(&self, tree: &mut SearchTree<B>, node: NodeId, rng: &mut dyn RngCore) -> NodeId {
        // The shuffle is drawn even for exhausted nodes so the generator
        // advances the same way on every iteration.
        for cell in shuffled_cells(rng) {
            if tree.child_for_move(node, cell).is_some() {
                continue;
            }

            let mut next = tree[node].state.clone();
            if next.place(cell).is_legal() {
                let child = tree.add_child(node, cell, next);
                log::trace!("expanded cell {} under node {}", cell, node.index());
                return child;
            }
        }

        node
    }
}
