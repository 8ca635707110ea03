// Render data for the board: what the UI draws and highlights

use crate::graph::GraphStore;
use crate::model::{NodeId, NodeKind};
use crate::path::PathResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardFormat {
    Text,
    Json,
}

impl BoardFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(BoardFormat::Text),
            "json" => Some(BoardFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: NodeId,
    pub target: NodeId,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub path: Vec<NodeId>,
    pub connections: usize,
}

impl BoardView {
    /// Snapshot the board, flagging nodes and edges on the current path
    pub fn build(board: &GraphStore, path: &PathResult) -> Self {
        let nodes = board
            .nodes()
            .map(|n| NodeView {
                id: n.id.clone(),
                kind: n.kind,
                label: n.label.clone(),
                image_ref: n.image_ref.clone(),
                highlighted: path.contains_node(&n.id),
            })
            .collect();

        let edges = board
            .edges()
            .into_iter()
            .map(|e| EdgeView {
                highlighted: path.contains_edge(&e.source, &e.target),
                source: e.source,
                target: e.target,
            })
            .collect();

        Self {
            nodes,
            edges,
            path: path.path.clone(),
            connections: path.hop_count,
        }
    }

    pub fn label_of(&self, id: &NodeId) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| &n.id == id)
            .map(|n| n.label.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: BoardFormat) -> serde_json::Result<String> {
        match format {
            BoardFormat::Text => Ok(render_board_text(self)),
            BoardFormat::Json => self.to_json(),
        }
    }
}

/// Labels along the path joined with arrows, e.g. `A → Movie → B`
pub fn describe_path(view: &BoardView) -> String {
    view.path
        .iter()
        .map(|id| view.label_of(id).unwrap_or(id.as_str()))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Plain-text board summary
pub fn render_board_text(view: &BoardView) -> String {
    let actors = view.nodes.iter().filter(|n| n.kind == NodeKind::Actor).count();
    let movies = view.nodes.len() - actors;

    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Board:\n");
    report.push_str(&format!("  Actors: {}\n", actors));
    report.push_str(&format!("  Movies: {}\n", movies));
    report.push_str(&format!("  Links: {}\n", view.edges.len()));

    report.push_str("\n# Best path:\n");
    if view.path.is_empty() {
        report.push_str("  No path yet\n");
    } else {
        report.push_str(&format!("  {} connection(s)\n", view.connections));
        report.push_str(&format!("  {}\n", describe_path(view)));
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for node in &view.nodes {
        let marker = if node.highlighted { "*" } else { " " };
        report.push_str(&format!(
            "  {} [{}] {} ({})\n",
            marker,
            node.kind.as_str(),
            node.label,
            node.id
        ));
    }

    report
}
