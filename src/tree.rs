//! Tree data structures for Monte Carlo Tree Search
//!
//! Nodes live in a single arena owned by [`SearchTree`] and refer to each
//! other by [`NodeId`]. Growing the arena never invalidates an id, so the
//! selection path and parent links stay valid while children are appended.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::game_state::Board;

/// Stable index of a node inside a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the MCTS tree
///
/// Holds the board snapshot for one reachable position together with its
/// visit and win counts.
#[derive(Debug, Clone)]
pub struct MCTSNode<B: Board> {
    /// The board at this node
    pub state: B,

    /// Cell whose placement produced this node (None for root)
    pub last_move: Option<usize>,

    /// Parent node (None for root)
    pub parent: Option<NodeId>,

    /// Children in creation order
    pub children: Vec<NodeId>,

    /// Number of rollouts that passed through this node
    pub visits: u64,

    /// Number of those rollouts credited as wins
    pub wins: u64,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,

    /// Number of legal placements from `state`, counted once on creation
    legal_moves: usize,
}

impl<B: Board> MCTSNode<B> {
    fn new(state: B, last_move: Option<usize>, parent: Option<NodeId>, depth: usize) -> Self {
        let legal_moves = state.legal_move_count();
        MCTSNode {
            state,
            last_move,
            parent,
            children: Vec::new(),
            visits: 0,
            wins: 0,
            depth,
            legal_moves,
        }
    }

    /// Returns the number of legal placements from this node's position
    pub fn legal_move_count(&self) -> usize {
        self.legal_moves
    }

    /// Returns true if the position has no legal placement
    pub fn is_terminal(&self) -> bool {
        self.legal_moves == 0
    }

    /// Returns true if every legal placement already has a child
    ///
    /// Terminal nodes are never fully expanded.
    pub fn is_fully_expanded(&self) -> bool {
        self.legal_moves > 0 && self.children.len() == self.legal_moves
    }

    /// Returns the observed win rate, or 0 before the first visit
    pub fn value(&self) -> f64 {
        crate::utils::win_rate(self.wins, self.visits)
    }
}

/// Arena holding every node of one search
///
/// The root is always [`SearchTree::root`]. A tree is built for a single
/// decision and dropped afterwards.
#[derive(Debug, Clone)]
pub struct SearchTree<B: Board> {
    nodes: Vec<MCTSNode<B>>,
}

impl<B: Board> SearchTree<B> {
    /// Creates a tree holding only a root for `state`
    pub fn new(state: B) -> Self {
        SearchTree {
            nodes: vec![MCTSNode::new(state, None, None, 0)],
        }
    }

    /// Returns the id of the root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always contains its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for `id`
    pub fn get(&self, id: NodeId) -> &MCTSNode<B> {
        &self.nodes[id.0]
    }

    /// Returns the node for `id` mutably
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<B> {
        &mut self.nodes[id.0]
    }

    /// Returns the child of `parent` reached by playing `cell`, if created
    pub fn child_for_move(&self, parent: NodeId, cell: usize) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].last_move == Some(cell))
    }

    /// Appends a child of `parent` holding `state`, reached by `cell`
    pub fn add_child(&mut self, parent: NodeId, cell: usize, state: B) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(MCTSNode::new(state, Some(cell), Some(parent), depth));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Iterates over all nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = &MCTSNode<B>> {
        self.nodes.iter()
    }

    /// Renders the tree as indented text, children in creation order
    pub fn visualize(&self) -> String {
        let mut output = String::new();
        self.visualize_node(self.root(), &mut output);
        output
    }

    fn visualize_node(&self, id: NodeId, output: &mut String) {
        let node = &self.nodes[id.0];
        let indent = "  ".repeat(node.depth);
        let label = match node.last_move {
            Some(cell) => cell.to_string(),
            None => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, wins: {}, value: {:.3})\n",
            indent,
            label,
            node.visits,
            node.wins,
            node.value()
        ));

        for &child in &node.children {
            self.visualize_node(child, output);
        }
    }
}

impl<B: Board> Index<NodeId> for SearchTree<B> {
    type Output = MCTSNode<B>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
    }
}

impl<B: Board> IndexMut<NodeId> for SearchTree<B> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

/// A root-to-leaf path recorded during one iteration
///
/// The first element is always the root.
#[derive(Debug, Clone)]
pub struct NodePath {
    /// Node ids from the root downwards
    pub nodes: Vec<NodeId>,
}

impl NodePath {
    /// Creates a path holding only `root`
    pub fn new(root: NodeId) -> Self {
        NodePath { nodes: vec![root] }
    }

    /// Extends the path with a new node
    pub fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    /// Returns the last node on the path
    pub fn leaf(&self) -> NodeId {
        // A path is never empty: it is created with its root.
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, id) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", id.0)?;
        }
        write!(f, "]")
    }
}
