use crate::connect::{Connection, ConnectionResolver, ConnectedActors};
use crate::error::{GameError, Result};
use crate::graph::{CommitSummary, GraphStore};
use crate::model::{Node, NodeId};
use crate::path::{PathResult, find_path};
use crate::report::BoardView;
use futures::future::try_join;
use reellink_tmdb::{Actor, EntitySource, MediaType, Movie, SearchResult};
use std::collections::HashSet;
use tracing::{debug, info};

/// Result of one player selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Connected {
        summary: CommitSummary,
        newly_connected: usize,
    },
    NoConnection,
}

impl MoveOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, MoveOutcome::Connected { .. })
    }
}

/// A single game session between two seed actors.
///
/// Every accepted selection is committed in one step and followed by exactly
/// one path recomputation. Failed lookups and rejected selections leave the
/// session untouched.
#[derive(Debug, Clone)]
pub struct Game {
    seeds: [Actor; 2],
    board: GraphStore,
    connected: ConnectedActors,
    path: PathResult,
}

impl Game {
    pub fn new(seed_a: Actor, seed_b: Actor) -> Result<Self> {
        if seed_a.id == seed_b.id {
            return Err(GameError::SameSeed(seed_a.id));
        }

        let node_a = Node::actor(&seed_a);
        let node_b = Node::actor(&seed_b);
        let mut game = Self {
            board: GraphStore::new(node_a.clone(), node_b.clone()),
            connected: ConnectedActors::from_seeds(node_a, node_b),
            seeds: [seed_a, seed_b],
            path: PathResult::disconnected(),
        };
        game.recompute();
        info!(
            "New game: connect {} and {}",
            game.seeds[0].name, game.seeds[1].name
        );
        Ok(game)
    }

    /// Look up both seed actors and start a game between them
    pub async fn start<S: EntitySource>(source: &S, actor_a: u64, actor_b: u64) -> Result<Self> {
        if actor_a == actor_b {
            return Err(GameError::SameSeed(actor_a));
        }
        let (seed_a, seed_b) =
            try_join(source.actor_details(actor_a), source.actor_details(actor_b)).await?;
        Self::new(seed_a, seed_b)
    }

    pub fn seeds(&self) -> (&Actor, &Actor) {
        (&self.seeds[0], &self.seeds[1])
    }

    pub fn seed_ids(&self) -> (NodeId, NodeId) {
        (NodeId::actor(self.seeds[0].id), NodeId::actor(self.seeds[1].id))
    }

    pub fn board(&self) -> &GraphStore {
        &self.board
    }

    pub fn connected_actors(&self) -> &ConnectedActors {
        &self.connected
    }

    pub fn path(&self) -> &PathResult {
        &self.path
    }

    /// Movies on the current best path
    pub fn connection_count(&self) -> usize {
        self.path.hop_count
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_connected()
    }

    pub async fn select_movie<S: EntitySource>(
        &mut self,
        source: &S,
        movie: &Movie,
    ) -> Result<MoveOutcome> {
        let connection = ConnectionResolver::new(source)
            .try_connect_movie(movie, &self.connected)
            .await?;
        self.commit(connection)
    }

    pub async fn select_actor<S: EntitySource>(
        &mut self,
        source: &S,
        actor: &Actor,
    ) -> Result<MoveOutcome> {
        let board_movies: HashSet<NodeId> = self.board.movie_ids().cloned().collect();
        let connection = ConnectionResolver::new(source)
            .try_connect_actor(actor, &board_movies)
            .await?;
        self.commit(connection)
    }

    /// Dispatch a search pick to the movie or person rule
    pub async fn select<S: EntitySource>(
        &mut self,
        source: &S,
        result: &SearchResult,
    ) -> Result<MoveOutcome> {
        match result.media_type {
            MediaType::Movie => match result.as_movie() {
                Some(movie) => self.select_movie(source, &movie).await,
                None => Err(GameError::UnsupportedSelection),
            },
            MediaType::Person => match result.as_actor() {
                Some(actor) => self.select_actor(source, &actor).await,
                None => Err(GameError::UnsupportedSelection),
            },
            MediaType::Other => Err(GameError::UnsupportedSelection),
        }
    }

    /// Commit a resolver decision to the board and refresh the path
    pub fn commit(&mut self, connection: Connection) -> Result<MoveOutcome> {
        let proposal = match connection {
            Connection::Accepted(proposal) => proposal,
            Connection::NoConnection => {
                debug!("Selection rejected; board unchanged");
                return Ok(MoveOutcome::NoConnection);
            }
        };

        let summary = self.board.apply(&proposal.delta)?;
        let newly_connected = self.connected.admit(&proposal);
        self.recompute();

        info!(
            "Board now {} node(s), {} edge(s); {} connected actor(s); best path {} connection(s)",
            self.board.node_count(),
            self.board.edge_count(),
            self.connected.len(),
            self.path.hop_count
        );

        Ok(MoveOutcome::Connected {
            summary,
            newly_connected,
        })
    }

    /// Drop every selection and go back to the two seeds
    pub fn reset(&mut self) {
        self.board.reset();
        self.connected =
            ConnectedActors::from_seeds(Node::actor(&self.seeds[0]), Node::actor(&self.seeds[1]));
        self.recompute();
        info!("Game reset");
    }

    /// Hide people who are already connected, as the in-game search does
    pub fn filter_search_results(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        results
            .into_iter()
            .filter(|r| match r.media_type {
                MediaType::Movie => true,
                MediaType::Person => !self.connected.contains(&NodeId::actor(r.id)),
                MediaType::Other => false,
            })
            .collect()
    }

    pub fn view(&self) -> BoardView {
        BoardView::build(&self.board, &self.path)
    }

    fn recompute(&mut self) {
        let (from, to) = self.seed_ids();
        self.path = find_path(&self.board, &from, &to);
    }
}
