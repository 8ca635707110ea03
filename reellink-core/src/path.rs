// Shortest connection between the two seed actors

use crate::graph::GraphStore;
use crate::model::NodeId;
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// One shortest route between two nodes, or none
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    /// Number of movies on the path
    pub hop_count: usize,
}

impl PathResult {
    pub fn disconnected() -> Self {
        Self::default()
    }

    fn from_path(path: Vec<NodeId>) -> Self {
        let hop_count = path.len().saturating_sub(1) / 2;
        Self { path, hop_count }
    }

    pub fn is_connected(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.path.contains(id)
    }

    /// True when `a` and `b` sit next to each other on the path
    pub fn contains_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.path
            .windows(2)
            .any(|w| (&w[0] == a && &w[1] == b) || (&w[0] == b && &w[1] == a))
    }
}

/// Breadth-first search from `from` to `to` over the undirected board.
///
/// Neighbours are expanded in edge-insertion order, so an unchanged board
/// always yields the same path.
pub fn find_path(graph: &GraphStore, from: &NodeId, to: &NodeId) -> PathResult {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        debug!("Path endpoints {} / {} not on the board", from, to);
        return PathResult::disconnected();
    };

    if start == goal {
        return PathResult::from_path(vec![from.clone()]);
    }

    let mut parents: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    parents.insert(start, start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbor_indices(current) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);
            if next == goal {
                let path = walk_back(graph, &parents, start, goal);
                debug!("Shortest path {} -> {}: {} node(s)", from, to, path.len());
                return PathResult::from_path(path);
            }
            queue.push_back(next);
        }
    }

    debug!("No path between {} and {} ({} node(s) reached)", from, to, parents.len());
    PathResult::disconnected()
}

fn walk_back(
    graph: &GraphStore,
    parents: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeId> {
    let mut path = vec![graph.id_at(goal).clone()];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(graph.id_at(parent).clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
