use reellink_tmdb::{Actor, CastMember, Movie};
use serde::{Deserialize, Serialize};
use std::fmt;

const MOVIE_PREFIX: &str = "movie-";

/// Identifier of a node on the board.
///
/// Actors use their raw numeric id, movies are prefixed with `movie-` so the
/// two kinds share one namespace without colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn actor(id: u64) -> Self {
        Self(id.to_string())
    }

    pub fn movie(id: u64) -> Self {
        Self(format!("{}{}", MOVIE_PREFIX, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_movie(&self) -> bool {
        self.0.starts_with(MOVIE_PREFIX)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Actor,
    Movie,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Actor => "actor",
            NodeKind::Movie => "movie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub image_ref: Option<String>,
}

impl Node {
    pub fn actor(actor: &Actor) -> Self {
        Self {
            id: NodeId::actor(actor.id),
            kind: NodeKind::Actor,
            label: actor.name.clone(),
            image_ref: actor.image_url(),
        }
    }

    pub fn cast_member(member: &CastMember) -> Self {
        Self {
            id: NodeId::actor(member.id),
            kind: NodeKind::Actor,
            label: member.name.clone(),
            image_ref: member.image_url(),
        }
    }

    pub fn movie(movie: &Movie) -> Self {
        Self {
            id: NodeId::movie(movie.id),
            kind: NodeKind::Movie,
            label: movie.title.clone(),
            image_ref: movie.image_url(),
        }
    }
}

/// An undirected "starred in" link between an actor and a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Order-independent key, so `{a, b}` and `{b, a}` compare equal
    pub fn key(&self) -> (&NodeId, &NodeId) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }

    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }
}

/// Nodes and edges proposed for a single atomic commit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDelta {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDelta {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Actor ids touched by the proposed edges, in edge order
    pub fn actor_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for edge in &self.edges {
            for end in [&edge.source, &edge.target] {
                if !end.is_movie() && !ids.contains(end) {
                    ids.push(end.clone());
                }
            }
        }
        ids
    }
}
