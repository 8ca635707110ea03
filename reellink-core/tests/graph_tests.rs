// Tests for the board graph store

mod common;

use common::{actor_node, movie_node};
use reellink_core::{Edge, GraphDelta, GraphError, GraphStore, NodeId};

fn seeded() -> GraphStore {
    GraphStore::new(actor_node(1), actor_node(2))
}

// ============================================================================
// Set Semantics Tests
// ============================================================================

#[test]
fn test_add_same_node_twice_is_noop() {
    let mut store = seeded();

    assert_eq!(store.add_nodes(vec![movie_node(10)]), 1);
    let before: Vec<_> = store.nodes().cloned().collect();

    assert_eq!(store.add_nodes(vec![movie_node(10)]), 0);
    let after: Vec<_> = store.nodes().cloned().collect();

    assert_eq!(before, after);
    assert_eq!(store.node_count(), 3);
}

#[test]
fn test_existing_node_is_never_overwritten() {
    let mut store = seeded();
    let mut renamed = actor_node(1);
    renamed.label = "Someone Else".to_string();

    store.add_nodes(vec![renamed]);

    assert_eq!(store.node(&NodeId::actor(1)).unwrap().label, "Actor 1");
}

#[test]
fn test_add_same_edge_twice_in_either_order_is_noop() {
    let mut store = seeded();
    store.add_nodes(vec![movie_node(10)]);

    let added = store
        .add_edges(vec![Edge::new(NodeId::actor(1), NodeId::movie(10))])
        .unwrap();
    assert_eq!(added, 1);

    let added = store
        .add_edges(vec![
            Edge::new(NodeId::actor(1), NodeId::movie(10)),
            Edge::new(NodeId::movie(10), NodeId::actor(1)),
        ])
        .unwrap();
    assert_eq!(added, 0);
    assert_eq!(store.edge_count(), 1);
    assert!(store.has_edge(&NodeId::movie(10), &NodeId::actor(1)));
}

#[test]
fn test_has_node() {
    let store = seeded();
    assert!(store.has_node(&NodeId::actor(1)));
    assert!(store.has_node(&NodeId::actor(2)));
    assert!(!store.has_node(&NodeId::movie(1)));
}

// ============================================================================
// Bipartite Invariant Tests
// ============================================================================

#[test]
fn test_actor_actor_edge_rejected() {
    let mut store = seeded();

    let err = store
        .add_edges(vec![Edge::new(NodeId::actor(1), NodeId::actor(2))])
        .unwrap_err();

    assert!(matches!(err, GraphError::SameKind { .. }));
    assert_eq!(store.edge_count(), 0);
}

#[test]
fn test_movie_movie_edge_rejected() {
    let mut store = seeded();
    store.add_nodes(vec![movie_node(10), movie_node(11)]);

    let err = store
        .add_edges(vec![Edge::new(NodeId::movie(10), NodeId::movie(11))])
        .unwrap_err();

    assert!(matches!(err, GraphError::SameKind { .. }));
}

#[test]
fn test_edge_to_unknown_node_rejected() {
    let mut store = seeded();

    let err = store
        .add_edges(vec![Edge::new(NodeId::actor(1), NodeId::movie(99))])
        .unwrap_err();

    assert_eq!(
        err,
        GraphError::UnknownNode {
            from: NodeId::actor(1),
            to: NodeId::movie(99),
            missing: NodeId::movie(99),
        }
    );
}

#[test]
fn test_invalid_edge_rejects_whole_batch() {
    let mut store = seeded();
    store.add_nodes(vec![movie_node(10)]);

    let result = store.add_edges(vec![
        Edge::new(NodeId::actor(1), NodeId::movie(10)),
        Edge::new(NodeId::actor(1), NodeId::actor(2)),
    ]);

    assert!(result.is_err());
    assert_eq!(store.edge_count(), 0);
}

// ============================================================================
// Atomic Commit Tests
// ============================================================================

#[test]
fn test_apply_commits_nodes_and_edges_together() {
    let mut store = seeded();
    let delta = GraphDelta {
        nodes: vec![movie_node(10)],
        edges: vec![
            Edge::new(NodeId::actor(1), NodeId::movie(10)),
            Edge::new(NodeId::actor(2), NodeId::movie(10)),
        ],
    };

    let summary = store.apply(&delta).unwrap();

    assert_eq!(summary.nodes_added, 1);
    assert_eq!(summary.edges_added, 2);
    assert!(!summary.is_noop());

    let again = store.apply(&delta).unwrap();
    assert!(again.is_noop());
}

#[test]
fn test_apply_failure_leaves_board_unchanged() {
    let mut store = seeded();
    let delta = GraphDelta {
        nodes: vec![movie_node(10)],
        edges: vec![
            Edge::new(NodeId::actor(1), NodeId::movie(10)),
            Edge::new(NodeId::actor(3), NodeId::movie(10)),
        ],
    };

    assert!(store.apply(&delta).is_err());
    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 0);
}

// ============================================================================
// Ordering and Reset Tests
// ============================================================================

#[test]
fn test_nodes_and_edges_keep_insertion_order() {
    let mut store = seeded();
    store
        .apply(&GraphDelta {
            nodes: vec![movie_node(30), actor_node(7), movie_node(20)],
            edges: vec![
                Edge::new(NodeId::actor(7), NodeId::movie(20)),
                Edge::new(NodeId::actor(1), NodeId::movie(30)),
            ],
        })
        .unwrap();

    let node_ids: Vec<String> = store.nodes().map(|n| n.id.to_string()).collect();
    assert_eq!(node_ids, vec!["1", "2", "movie-30", "7", "movie-20"]);

    let edges = store.edges();
    assert_eq!(edges[0], Edge::new(NodeId::actor(7), NodeId::movie(20)));
    assert_eq!(edges[1], Edge::new(NodeId::actor(1), NodeId::movie(30)));
}

#[test]
fn test_reset_restores_seeds_only() {
    let mut store = seeded();
    store
        .apply(&GraphDelta {
            nodes: vec![movie_node(10)],
            edges: vec![Edge::new(NodeId::actor(1), NodeId::movie(10))],
        })
        .unwrap();

    store.reset();

    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 0);
    assert!(store.has_node(&NodeId::actor(1)));
    assert!(store.has_node(&NodeId::actor(2)));
    assert!(!store.has_node(&NodeId::movie(10)));
}

#[test]
fn test_movie_ids_lists_only_movies() {
    let mut store = seeded();
    store.add_nodes(vec![movie_node(10), actor_node(3), movie_node(11)]);

    let movies: Vec<&NodeId> = store.movie_ids().collect();
    assert_eq!(movies, vec![&NodeId::movie(10), &NodeId::movie(11)]);
}
