pub mod connect;
pub mod error;
pub mod game;
pub mod graph;
pub mod model;
pub mod path;
pub mod report;

pub use connect::{Connection, ConnectionResolver, ConnectedActors, Proposal};
pub use error::{GameError, GraphError};
pub use game::{Game, MoveOutcome};
pub use graph::{CommitSummary, GraphStore};
pub use model::{Edge, GraphDelta, Node, NodeId, NodeKind};
pub use path::{PathResult, find_path};
pub use report::{BoardFormat, BoardView};
