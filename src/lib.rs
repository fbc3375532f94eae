//! # nogo-mcts
//!
//! A Monte Carlo Tree Search (MCTS) move picker for 9x9 NoGo and any other
//! placement game on an 81-cell grid.
//!
//! The engine only talks to the game through the [`Board`] trait: attempt a
//! placement, ask whose turn it is, ask which cell produced the position.
//! Each decision builds a fresh tree from the current position, runs a fixed
//! number of iterations, and returns the most visited move.
//!
//! ## Features
//!
//! - Arena-backed search tree addressed by stable [`tree::NodeId`]s
//! - UCB1 selection with a configurable exploration constant
//! - Fixed-order light playouts driven by a caller-supplied generator
//! - Configurable reward perspective for backpropagation
//! - A complete NoGo board and ready-made players
//!
//! ## Basic Usage
//!
//! ```
//! use nogo_mcts::{Board, MCTSConfig, NoGoBoard, MCTS};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let board = NoGoBoard::new();
//! let config = MCTSConfig::default().with_max_iterations(100);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let mut mcts = MCTS::new(board.clone(), config);
//! let action = mcts.search(&mut rng);
//!
//! println!("{}", mcts.get_statistics().summary());
//! assert!(board.is_legal(action.cell().unwrap()));
//! ```
//!
//! ## How It Works
//!
//! Every iteration runs four phases:
//!
//! 1. **Selection**: Starting from the root, descend through fully expanded
//!    nodes by UCB1 score until reaching a node with an untried move or a
//!    terminal position.
//!
//! 2. **Expansion**: Add one child for an untried legal move, chosen by
//!    scanning a random permutation of the cells.
//!
//! 3. **Simulation**: Play the new position out with one random cell order,
//!    always taking the first cell of that order that is still legal. The side
//!    left without a legal move loses.
//!
//! 4. **Backpropagation**: Add a visit to every node on the path and a win
//!    where the winner matches the configured [`config::RewardPerspective`].
//!
//! All randomness comes from the generator passed to [`MCTS::search`], so a
//! fixed seed reproduces the same decision.

pub mod agent;
pub mod config;
pub mod game_state;
pub mod mcts;
pub mod nogo;
pub mod policy;
pub mod stats;
pub mod tree;
pub mod utils;

pub use agent::{Agent, MctsPlayer, Player, RandomPlayer};
pub use config::MCTSConfig;
pub use game_state::{Action, Board, Color, PlaceStatus, CELLS};
pub use mcts::MCTS;
pub use nogo::NoGoBoard;
pub use policy::{BackpropagationPolicy, ExpansionPolicy, SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tree::{MCTSNode, NodeId, NodePath, SearchTree};

/// Error types for agent setup and configuration
///
/// The search itself never fails; a position without legal moves yields the
/// null action instead.
#[derive(thiserror::Error, Debug)]
pub enum MCTSError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Agent name contains a reserved character
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Agent role is neither black nor white
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A property value could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidProperty { key: String, value: String },

    /// A required property is absent
    #[error("Missing property: {0}")]
    MissingProperty(String),
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MCTSError>;
