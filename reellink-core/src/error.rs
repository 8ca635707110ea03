use crate::model::NodeId;
use reellink_tmdb::LookupError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    // `source` is reserved by thiserror, so edge ends are named from/to here
    #[error("Edge {from}-{to} references unknown node {missing}")]
    UnknownNode {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("Edge {from}-{to} must join an actor and a movie")]
    SameKind { from: NodeId, to: NodeId },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Graph update rejected: {0}")]
    Graph(#[from] GraphError),

    #[error("Both seed actors are the same person ({0})")]
    SameSeed(u64),

    #[error("Only movies and people can join the board")]
    UnsupportedSelection,
}

pub type Result<T> = std::result::Result<T, GameError>;
