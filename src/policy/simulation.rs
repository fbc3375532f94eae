//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies play a game out from a given position and report
//! which color won.

use rand::RngCore;

use crate::{
    game_state::{Board, Color},
    utils::shuffled_cells,
};

/// Trait for policies that simulate games
pub trait SimulationPolicy<B: Board>: Send + Sync {
    /// Plays `state` out to the end and returns the winner
    fn simulate(&self, state: &B, rng: &mut dyn RngCore) -> Color;
}

/// Fixed-order playout policy
///
/// Draws one random priority order over all cells at the start of the
/// playout. Each turn the order is scanned from the beginning and the first
/// legal cell is played, so the same cell keeps being preferred for as long
/// as it stays legal. The game ends when no cell is legal, and the side left
/// to move loses.
#[derive(Debug, Clone)]
pub struct FixedOrderPolicy;

impl FixedOrderPolicy {
    /// Creates a new fixed-order policy
    pub fn new() -> Self {
        FixedOrderPolicy
    }

    /// Plays `board` out in place along `order` and returns the winner
    pub fn play_out<B: Board>(board: &mut B, order: &[usize]) -> Color {
        while order.iter().any(|&cell| board.place(cell).is_legal()) {}
        board.side_to_move().opponent()
    }
}

impl Default for FixedOrderPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> SimulationPolicy<B> for FixedOrderPolicy {
    fn simulate(&self, state: &B, rng: &mut dyn RngCore) -> Color {
        let order = shuffled_cells(rng);
        let mut board = state.clone();
        Self::play_out(&mut board, &order)
    }
}
