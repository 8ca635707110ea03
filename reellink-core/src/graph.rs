// In-memory board: actor and movie nodes joined by "starred in" edges

use crate::error::GraphError;
use crate::model::{Edge, GraphDelta, Node, NodeId, NodeKind};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::debug;

/// Counts of what a commit actually added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub nodes_added: usize,
    pub edges_added: usize,
}

impl CommitSummary {
    pub fn is_noop(&self) -> bool {
        self.nodes_added == 0 && self.edges_added == 0
    }
}

/// Graph of actors and movies with set semantics.
///
/// Nodes are keyed by [`NodeId`] and edges by their unordered endpoint pair;
/// re-adding either is a no-op. Nothing is ever removed except through
/// [`GraphStore::reset`], so petgraph indices follow insertion order.
#[derive(Debug, Clone)]
pub struct GraphStore {
    graph: UnGraph<Node, ()>,
    index: HashMap<NodeId, NodeIndex>,
    seeds: [Node; 2],
}

impl GraphStore {
    pub fn new(seed_a: Node, seed_b: Node) -> Self {
        let mut store = Self {
            graph: UnGraph::default(),
            index: HashMap::new(),
            seeds: [seed_a, seed_b],
        };
        store.reset();
        store
    }

    /// Clear the board back to the two seed actors
    pub fn reset(&mut self) {
        self.graph.clear();
        self.index.clear();
        let seeds = self.seeds.clone();
        self.add_nodes(seeds);
        debug!("Board reset to seeds {} and {}", self.seeds[0].id, self.seeds[1].id);
    }

    pub fn seed_ids(&self) -> (&NodeId, &NodeId) {
        (&self.seeds[0].id, &self.seeds[1].id)
    }

    fn insert_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        let id = node.id.clone();
        let ix = self.graph.add_node(node);
        self.index.insert(id, ix);
        true
    }

    /// Add nodes, skipping ids already on the board. Returns how many were new.
    pub fn add_nodes<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> usize {
        let mut added = 0;
        for node in nodes {
            if self.insert_node(node) {
                added += 1;
            }
        }
        added
    }

    fn kind_of(&self, id: &NodeId, pending: &HashMap<&NodeId, NodeKind>) -> Option<NodeKind> {
        self.node(id)
            .map(|n| n.kind)
            .or_else(|| pending.get(id).copied())
    }

    fn validate_edge(
        &self,
        edge: &Edge,
        pending: &HashMap<&NodeId, NodeKind>,
    ) -> Result<(), GraphError> {
        let unknown = |missing: &NodeId| GraphError::UnknownNode {
            from: edge.source.clone(),
            to: edge.target.clone(),
            missing: missing.clone(),
        };
        let source_kind = self
            .kind_of(&edge.source, pending)
            .ok_or_else(|| unknown(&edge.source))?;
        let target_kind = self
            .kind_of(&edge.target, pending)
            .ok_or_else(|| unknown(&edge.target))?;

        if source_kind == target_kind {
            return Err(GraphError::SameKind {
                from: edge.source.clone(),
                to: edge.target.clone(),
            });
        }
        Ok(())
    }

    fn insert_edge(&mut self, edge: &Edge) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(&edge.source), self.index.get(&edge.target))
        else {
            return false;
        };
        // find_edge on an undirected graph matches either orientation
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Add edges between nodes already on the board.
    ///
    /// The batch is validated first; if any edge is invalid nothing is added.
    pub fn add_edges<I: IntoIterator<Item = Edge>>(&mut self, edges: I) -> Result<usize, GraphError> {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let pending = HashMap::new();
        for edge in &edges {
            self.validate_edge(edge, &pending)?;
        }
        Ok(edges.iter().filter(|e| self.insert_edge(e)).count())
    }

    /// Commit a node+edge delta as one atomic step
    pub fn apply(&mut self, delta: &GraphDelta) -> Result<CommitSummary, GraphError> {
        let pending: HashMap<&NodeId, NodeKind> =
            delta.nodes.iter().map(|n| (&n.id, n.kind)).collect();
        for edge in &delta.edges {
            self.validate_edge(edge, &pending)?;
        }

        let nodes_added = self.add_nodes(delta.nodes.iter().cloned());
        let edges_added = delta.edges.iter().filter(|e| self.insert_edge(e)).count();

        let summary = CommitSummary {
            nodes_added,
            edges_added,
        };
        debug!(
            "Committed {} new node(s) and {} new edge(s); board has {} nodes, {} edges",
            summary.nodes_added,
            summary.edges_added,
            self.node_count(),
            self.edge_count()
        );
        Ok(summary)
    }

    pub fn has_node(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).and_then(|&ix| self.graph.node_weight(ix))
    }

    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|ix| &self.graph[ix])
    }

    /// Edges in insertion order, oriented as they were added
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| {
                Edge::new(
                    self.graph[e.source()].id.clone(),
                    self.graph[e.target()].id.clone(),
                )
            })
            .collect()
    }

    /// Neighbours of `id` in the order their edges were added
    pub fn neighbors(&self, id: &NodeId) -> Vec<&NodeId> {
        match self.index.get(id) {
            Some(&ix) => self
                .neighbor_indices(ix)
                .into_iter()
                .map(|n| &self.graph[n].id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ids of every movie currently on the board
    pub fn movie_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes()
            .filter(|n| n.kind == NodeKind::Movie)
            .map(|n| &n.id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, ix: NodeIndex) -> &NodeId {
        &self.graph[ix].id
    }

    /// petgraph walks adjacency lists newest-first; sort by edge index to get insertion order
    pub(crate) fn neighbor_indices(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        let mut adjacent: Vec<_> = self
            .graph
            .edges(ix)
            .map(|e| {
                let other = if e.source() == ix { e.target() } else { e.source() };
                (e.id().index(), other)
            })
            .collect();
        adjacent.sort_by_key(|(edge_ix, _)| *edge_ix);
        adjacent.into_iter().map(|(_, n)| n).collect()
    }
}
