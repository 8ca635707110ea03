// Deciding whether a selected movie or person can join the board

use crate::model::{Edge, GraphDelta, Node, NodeId};
use reellink_tmdb::{Actor, CastMember, EntitySource, LookupError, Movie};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// An actor eligible to anchor new connections
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedActor {
    pub node: Node,
    /// Whether the actor already has a node on the board
    pub on_board: bool,
    /// Board movies that credit this actor; used to place the actor's node
    /// once it anchors a connection of its own
    pub via_movies: Vec<NodeId>,
}

/// Actors that new movies may connect through.
///
/// Starts with the two seeds and only ever grows during a game.
#[derive(Debug, Clone, Default)]
pub struct ConnectedActors {
    order: Vec<NodeId>,
    entries: HashMap<NodeId, ConnectedActor>,
}

impl ConnectedActors {
    pub fn from_seeds(seed_a: Node, seed_b: Node) -> Self {
        let mut set = Self::default();
        for seed in [seed_a, seed_b] {
            set.insert(ConnectedActor {
                node: seed,
                on_board: true,
                via_movies: Vec::new(),
            });
        }
        set
    }

    fn insert(&mut self, actor: ConnectedActor) -> bool {
        if self.entries.contains_key(&actor.node.id) {
            return false;
        }
        self.order.push(actor.node.id.clone());
        self.entries.insert(actor.node.id.clone(), actor);
        true
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &NodeId) -> Option<&ConnectedActor> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Connected actor ids in the order they became connected
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// Fold an accepted proposal into the set. Returns how many actors were new.
    pub fn admit(&mut self, proposal: &Proposal) -> usize {
        for id in &proposal.anchors {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.on_board = true;
                entry.via_movies.clear();
            }
        }

        let mut added = 0;
        for (node, via) in &proposal.joins {
            match self.entries.get_mut(&node.id) {
                Some(entry) if !entry.on_board => {
                    if !entry.via_movies.contains(via) {
                        entry.via_movies.push(via.clone());
                    }
                }
                Some(_) => {}
                None => {
                    self.insert(ConnectedActor {
                        node: node.clone(),
                        on_board: false,
                        via_movies: vec![via.clone()],
                    });
                    added += 1;
                }
            }
        }

        for node in &proposal.delta.nodes {
            if let Some(entry) = self.entries.get_mut(&node.id) {
                entry.on_board = true;
                entry.via_movies.clear();
            } else if !node.id.is_movie() {
                self.insert(ConnectedActor {
                    node: node.clone(),
                    on_board: true,
                    via_movies: Vec::new(),
                });
                added += 1;
            }
        }

        added
    }
}

/// Nodes and edges to commit for one accepted selection
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub delta: GraphDelta,
    /// Connected actors (movie selection) or board movies (person selection)
    /// the selection shares with the board
    pub anchors: Vec<NodeId>,
    /// Cast members that become connected through the accepted movie
    pub joins: Vec<(Node, NodeId)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Connection {
    Accepted(Proposal),
    NoConnection,
}

impl Connection {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Connection::Accepted(_))
    }

    pub fn proposal(&self) -> Option<&Proposal> {
        match self {
            Connection::Accepted(proposal) => Some(proposal),
            Connection::NoConnection => None,
        }
    }
}

/// Apply the intersection rule to a movie's cast.
///
/// Accepted iff at least one cast member is a connected actor. The proposal
/// holds the movie node, one edge per shared actor in cast order, and for
/// shared actors without a node yet, that node plus edges to the movies that
/// first connected them.
pub fn plan_movie_connection(
    movie: &Movie,
    cast: &[CastMember],
    connected: &ConnectedActors,
) -> Connection {
    let movie_id = NodeId::movie(movie.id);
    let mut seen = HashSet::new();
    let mut delta = GraphDelta {
        nodes: vec![Node::movie(movie)],
        edges: Vec::new(),
    };
    let mut anchors = Vec::new();
    let mut joins = Vec::new();

    for member in cast {
        if !seen.insert(member.id) {
            continue;
        }
        let actor_id = NodeId::actor(member.id);

        match connected.get(&actor_id) {
            Some(entry) => {
                if !entry.on_board {
                    delta.nodes.push(entry.node.clone());
                    for via in &entry.via_movies {
                        delta.edges.push(Edge::new(actor_id.clone(), via.clone()));
                    }
                }
                delta.edges.push(Edge::new(actor_id.clone(), movie_id.clone()));
                anchors.push(actor_id);
            }
            None => joins.push((Node::cast_member(member), movie_id.clone())),
        }
    }

    if anchors.is_empty() {
        debug!("{} shares no cast with the board", movie_id);
        return Connection::NoConnection;
    }

    debug!(
        "{} connects through {} actor(s); {} cast member(s) become connected",
        movie_id,
        anchors.len(),
        joins.len()
    );
    Connection::Accepted(Proposal {
        delta,
        anchors,
        joins,
    })
}

/// Apply the intersection rule to a person's movie credits against the
/// movies on the board
pub fn plan_actor_connection(
    actor: &Actor,
    credits: &[Movie],
    board_movies: &HashSet<NodeId>,
) -> Connection {
    let actor_id = NodeId::actor(actor.id);
    let mut seen = HashSet::new();
    let mut delta = GraphDelta {
        nodes: vec![Node::actor(actor)],
        edges: Vec::new(),
    };
    let mut anchors = Vec::new();

    for movie in credits {
        let movie_id = NodeId::movie(movie.id);
        if !seen.insert(movie.id) || !board_movies.contains(&movie_id) {
            continue;
        }
        delta.edges.push(Edge::new(actor_id.clone(), movie_id.clone()));
        anchors.push(movie_id);
    }

    if anchors.is_empty() {
        debug!("{} has no credits on the board", actor_id);
        return Connection::NoConnection;
    }

    Connection::Accepted(Proposal {
        delta,
        anchors,
        joins: Vec::new(),
    })
}

/// Fetches credits and applies the intersection rule. Never touches the board.
pub struct ConnectionResolver<'a, S> {
    source: &'a S,
}

impl<'a, S: EntitySource> ConnectionResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub async fn try_connect_movie(
        &self,
        movie: &Movie,
        connected: &ConnectedActors,
    ) -> Result<Connection, LookupError> {
        let cast = self.source.movie_cast(movie.id).await.map_err(|e| {
            warn!("Cast lookup for movie {} failed: {}", movie.id, e);
            e
        })?;
        debug!("Movie {} has {} cast member(s)", movie.id, cast.len());
        Ok(plan_movie_connection(movie, &cast, connected))
    }

    pub async fn try_connect_actor(
        &self,
        actor: &Actor,
        board_movies: &HashSet<NodeId>,
    ) -> Result<Connection, LookupError> {
        let credits = self
            .source
            .actor_movie_credits(actor.id)
            .await
            .map_err(|e| {
                warn!("Credit lookup for actor {} failed: {}", actor.id, e);
                e
            })?;
        debug!("Actor {} has {} movie credit(s)", actor.id, credits.len());
        Ok(plan_actor_connection(actor, &credits, board_movies))
    }
}
