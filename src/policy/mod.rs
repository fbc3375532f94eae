//! Policies for different phases of the MCTS algorithm
//!
//! This module contains implementations of the policies used in MCTS:
//! - Selection policies: How to descend through fully expanded nodes
//! - Expansion policies: Which untried move becomes the next child
//! - Simulation policies: How to play out games from a node
//! - Backpropagation policies: How to update node statistics

pub mod backpropagation;
pub mod expansion;
pub mod selection;
pub mod simulation;

pub use backpropagation::{BackpropagationPolicy, NodeMoverPolicy, SearchRootPolicy};
pub use expansion::{ExpansionPolicy, RandomExpansionPolicy};
pub use selection::{SelectionPolicy, UCB1Policy};
pub use simulation::{FixedOrderPolicy, SimulationPolicy};
