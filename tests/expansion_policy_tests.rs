mod common;

use std::collections::HashSet;

use common::StripBoard;
use nogo_mcts::{
    policy::expansion::{ExpansionPolicy, RandomExpansionPolicy},
    tree::SearchTree,
    Board, NoGoBoard,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_expansion_adds_distinct_legal_children() {
    let mut tree = SearchTree::new(StripBoard::new(3));
    let root = tree.root();
    let policy = RandomExpansionPolicy::new();
    let mut rng = StdRng::seed_from_u64(12);

    let mut cells = HashSet::new();
    for _ in 0..3 {
        let child = policy.expand(&mut tree, root, &mut rng);
        assert_ne!(child, root, "an untried move should be expanded");

        let node = &tree[child];
        assert_eq!(node.parent, Some(root));
        assert_eq!(node.depth, 1);
        assert_eq!(node.state.last_move(), node.last_move);
        cells.insert(node.last_move.unwrap());
    }

    assert_eq!(cells, HashSet::from([0, 1, 2]));
    assert!(tree[root].is_fully_expanded());
}

#[test]
fn test_expansion_of_exhausted_node_returns_itself() {
    let mut tree = SearchTree::new(StripBoard::new(1));
    let root = tree.root();
    let policy = RandomExpansionPolicy::new();
    let mut rng = StdRng::seed_from_u64(0);

    let child = policy.expand(&mut tree, root, &mut rng);
    assert_ne!(child, root);

    assert_eq!(policy.expand(&mut tree, root, &mut rng), root);
    assert_eq!(tree[root].children.len(), 1);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_expansion_of_terminal_node_returns_itself() {
    let mut tree = SearchTree::new(StripBoard::new(0));
    let root = tree.root();
    let policy = RandomExpansionPolicy::new();
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(policy.expand(&mut tree, root, &mut rng), root);
    assert!(tree[root].children.is_empty());
}

#[test]
fn test_children_keep_creation_order() {
    let mut tree = SearchTree::new(NoGoBoard::new());
    let root = tree.root();
    let policy = RandomExpansionPolicy::new();
    let mut rng = StdRng::seed_from_u64(77);

    let created: Vec<_> = (0..10)
        .map(|_| policy.expand(&mut tree, root, &mut rng))
        .collect();

    assert_eq!(tree[root].children, created);
    for &child in &created {
        let cell = tree[child].last_move.unwrap();
        assert!(NoGoBoard::new().is_legal(cell));
        assert_eq!(tree.child_for_move(root, cell), Some(child));
    }
}

#[test]
fn test_expansion_is_deterministic_per_seed() {
    let expand_once = |seed: u64| {
        let mut tree = SearchTree::new(NoGoBoard::new());
        let root = tree.root();
        let mut rng = StdRng::seed_from_u64(seed);
        let child = RandomExpansionPolicy::new().expand(&mut tree, root, &mut rng);
        tree[child].last_move
    };

    assert_eq!(expand_once(5), expand_once(5));
}
