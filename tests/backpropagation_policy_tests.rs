mod common;

use common::StripBoard;
use nogo_mcts::{
    policy::backpropagation::{BackpropagationPolicy, NodeMoverPolicy, SearchRootPolicy},
    tree::SearchTree,
    Color,
};

#[test]
fn test_search_root_policy() {
    let mut tree = SearchTree::new(StripBoard::new(2));
    let root = tree.root();
    let policy = SearchRootPolicy::new();

    policy.update_stats(&mut tree[root], Color::Black, Color::Black);
    policy.update_stats(&mut tree[root], Color::White, Color::Black);
    policy.update_stats(&mut tree[root], Color::Black, Color::Black);

    assert_eq!(tree[root].visits, 3);
    assert_eq!(tree[root].wins, 2);
    assert!((tree[root].value() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_search_root_policy_ignores_node_turn() {
    // A white-to-move node still counts black wins when black searches
    let mut tree = SearchTree::new(StripBoard::new(2));
    let root = tree.root();
    let child = tree.add_child(root, 0, StripBoard::new(2).with_side(Color::White));
    let policy = SearchRootPolicy::new();

    policy.update_stats(&mut tree[child], Color::Black, Color::Black);

    assert_eq!(tree[child].visits, 1);
    assert_eq!(tree[child].wins, 1);
}

#[test]
fn test_node_mover_policy() {
    let mut tree = SearchTree::new(StripBoard::new(2));
    let root = tree.root();
    // Black moved into this node, so white is to move
    let child = tree.add_child(root, 0, StripBoard::new(2).with_side(Color::White));
    let policy = NodeMoverPolicy::new();

    policy.update_stats(&mut tree[child], Color::Black, Color::White);
    policy.update_stats(&mut tree[child], Color::White, Color::White);

    assert_eq!(tree[child].visits, 2);
    assert_eq!(tree[child].wins, 1, "only the mover's win counts");
}

#[test]
fn test_unvisited_node_value() {
    let tree = SearchTree::new(StripBoard::new(2));
    assert_eq!(tree[tree.root()].value(), 0.0);
}
