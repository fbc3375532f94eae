//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module contains the core MCTS implementation, orchestrating the
//! four phases of selection, expansion, simulation, and backpropagation.

use std::time::Instant;

use rand::RngCore;

use crate::{
    config::{MCTSConfig, RewardPerspective},
    game_state::{Action, Board, Color},
    policy::{
        backpropagation::{BackpropagationPolicy, NodeMoverPolicy, SearchRootPolicy},
        expansion::{ExpansionPolicy, RandomExpansionPolicy},
        selection::{SelectionPolicy, UCB1Policy},
        simulation::{FixedOrderPolicy, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{NodeId, NodePath, SearchTree},
};

/// Runs a search of `iterations` cycles from `state` with default settings
///
/// This is the plain decision call: a fresh tree is built, searched and
/// dropped, and the most visited root move is returned. The result is the
/// null action when `iterations` is 0 or `state` has no legal move.
///
/// # Example
///
/// ```
/// use nogo_mcts::{mcts::run_mcts, Board, NoGoBoard};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let board = NoGoBoard::new();
/// let mut rng = StdRng::seed_from_u64(7);
/// let action = run_mcts(&board, 50, &mut rng);
///
/// let cell = action.cell().expect("empty board has legal moves");
/// assert!(board.is_legal(cell));
/// ```
pub fn run_mcts<B, R>(state: &B, iterations: usize, rng: &mut R) -> Action
where
    B: Board + 'static,
    R: RngCore,
{
    let config = MCTSConfig::default().with_max_iterations(iterations);
    MCTS::new(state.clone(), config).search(rng)
}

/// The main Monte Carlo Tree Search implementation
///
/// Holds the root position, the policies for each phase, and the tree of
/// the most recent search. That tree is kept only so it can be inspected
/// through [`MCTS::tree`], [`MCTS::get_statistics`] and
/// [`MCTS::visualize_tree`]; the next call to [`MCTS::search`] discards it
/// and starts again from the root position.
pub struct MCTS<B: Board> {
    /// Search tree of the latest decision
    tree: SearchTree<B>,

    /// Configuration for the search
    config: MCTSConfig,

    /// Statistics gathered during search
    statistics: SearchStatistics,

    /// Policy for selecting nodes during the selection phase
    selection_policy: Box<dyn SelectionPolicy<B>>,

    /// Policy for adding a node during the expansion phase
    expansion_policy: Box<dyn ExpansionPolicy<B>>,

    /// Policy for simulating games during the simulation phase
    simulation_policy: Box<dyn SimulationPolicy<B>>,

    /// Policy for backpropagating results
    backpropagation_policy: Box<dyn BackpropagationPolicy<B>>,
}

impl<B: Board + 'static> MCTS<B> {
    /// Creates a new MCTS instance with the given root position and configuration
    pub fn new(initial_state: B, config: MCTSConfig) -> Self {
        let selection_policy: Box<dyn SelectionPolicy<B>> =
            Box::new(UCB1Policy::new(config.exploration_constant));

        let expansion_policy: Box<dyn ExpansionPolicy<B>> = Box::new(RandomExpansionPolicy::new());

        let simulation_policy: Box<dyn SimulationPolicy<B>> = Box::new(FixedOrderPolicy::new());

        let backpropagation_policy: Box<dyn BackpropagationPolicy<B>> =
            match config.reward_perspective {
                RewardPerspective::SearchRoot => Box::new(SearchRootPolicy::new()),
                RewardPerspective::NodeMover => Box::new(NodeMoverPolicy::new()),
            };

        MCTS {
            tree: SearchTree::new(initial_state),
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            expansion_policy,
            simulation_policy,
            backpropagation_policy,
        }
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<B> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the expansion policy to use
    pub fn with_expansion_policy<P: ExpansionPolicy<B> + 'static>(mut self, policy: P) -> Self {
        self.expansion_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy<B> + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    /// Sets the backpropagation policy to use
    pub fn with_backpropagation_policy<P: BackpropagationPolicy<B> + 'static>(
        mut self,
        policy: P,
    ) -> Self {
        self.backpropagation_policy = Box::new(policy);
        self
    }

    /// Runs the configured number of iterations and returns the chosen move
    ///
    /// All randomness is drawn from `rng`, so the same root position, seed
    /// and budget always produce the same move.
    pub fn search<R: RngCore>(&mut self, rng: &mut R) -> Action {
        self.search_for_iterations(self.config.max_iterations, rng)
    }

    /// Runs the search for the specified number of iterations
    pub fn search_for_iterations<R: RngCore>(&mut self, iterations: usize, rng: &mut R) -> Action {
        let rng: &mut dyn RngCore = rng;

        let root_state = self.tree[self.tree.root()].state.clone();
        self.tree = SearchTree::new(root_state);
        self.statistics = SearchStatistics::new();

        let root_player = self.root_player();
        let start_time = Instant::now();

        for i in 0..iterations {
            self.execute_iteration(root_player, rng);
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start_time.elapsed();
        self.statistics.tree_size = self.tree.len();

        let root = &self.tree[self.tree.root()];
        self.statistics.root_children = root.children.len();
        self.statistics.root_visits = root.visits;

        let best = self.best_child();
        self.statistics.chosen_visits = best.map_or(0, |id| self.tree[id].visits);

        let action = best
            .and_then(|id| self.tree[id].last_move)
            .map(|cell| Action::place(cell, root_player))
            .unwrap_or_default();
        log::debug!("search finished: {}, chose {}", self.statistics.summary(), action);
        action
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self, root_player: Color, rng: &mut dyn RngCore) {
        // 1. Selection phase
        let mut path = self.selection();

        // 2. Expansion phase
        let leaf = path.leaf();
        let expanded = self.expansion_policy.expand(&mut self.tree, leaf, rng);
        if expanded != leaf {
            path.push(expanded);
            self.statistics.expansions += 1;
            self.statistics.max_depth = self.statistics.max_depth.max(self.tree[expanded].depth);
        } else {
            self.statistics.terminal_leaves += 1;
        }

        // 3. Simulation phase
        let winner = self
            .simulation_policy
            .simulate(&self.tree[expanded].state, rng);

        // 4. Backpropagation phase
        self.backpropagation(&path, winner, root_player);
    }

    /// Selection phase: descend through fully expanded nodes
    ///
    /// Stops at the first node that still has an untried move or is terminal.
    fn selection(&mut self) -> NodePath {
        let mut current = self.tree.root();
        let mut path = NodePath::new(current);

        while self.tree[current].is_fully_expanded() {
            let next = match self.selection_policy.select_child(&self.tree, current) {
                Some(next) => next,
                None => break,
            };

            path.push(next);
            current = next;
            self.statistics.max_depth = self.statistics.max_depth.max(self.tree[current].depth);
        }

        path
    }

    /// Backpropagation phase: update statistics in all nodes along the path
    fn backpropagation(&mut self, path: &NodePath, winner: Color, root_player: Color) {
        for &id in &path.nodes {
            self.backpropagation_policy
                .update_stats(&mut self.tree[id], winner, root_player);
        }
    }

    /// Returns the most visited root child, first one on ties
    fn best_child(&self) -> Option<NodeId> {
        let root = self.tree.root();
        let mut best: Option<NodeId> = None;

        for &child in &self.tree[root].children {
            let better = match best {
                Some(current) => self.tree[child].visits > self.tree[current].visits,
                None => true,
            };
            if better {
                best = Some(child);
            }
        }

        best
    }

    /// Returns the side to move at the root
    pub fn root_player(&self) -> Color {
        self.tree[self.tree.root()].state.side_to_move()
    }

    /// Returns the tree built by the latest search
    pub fn tree(&self) -> &SearchTree<B> {
        &self.tree
    }

    /// Returns the configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Returns the search statistics
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns a visualization of the search tree
    pub fn visualize_tree(&self) -> String {
        self.tree.visualize()
    }
}
