// Shared fixtures for integration tests

#![allow(dead_code)]

use reellink_core::{Node, NodeId, NodeKind};
use reellink_tmdb::error::Result;
use reellink_tmdb::{Actor, CastMember, EntitySource, LookupError, Movie, SearchResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory movie database
#[derive(Default)]
pub struct StaticSource {
    pub actors: HashMap<u64, Actor>,
    pub casts: HashMap<u64, Vec<CastMember>>,
    pub credits: HashMap<u64, Vec<Movie>>,
    pub results: Vec<SearchResult>,
    pub failing: HashSet<u64>,
    pub lookups: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actor(mut self, id: u64, name: &str) -> Self {
        self.actors.insert(id, Actor::new(id, name));
        self
    }

    pub fn with_cast(mut self, movie_id: u64, actor_ids: &[u64]) -> Self {
        let cast = actor_ids
            .iter()
            .map(|&id| CastMember::new(id, format!("Actor {}", id)))
            .collect();
        self.casts.insert(movie_id, cast);
        self
    }

    pub fn with_credits(mut self, actor_id: u64, movie_ids: &[u64]) -> Self {
        let movies = movie_ids
            .iter()
            .map(|&id| Movie::new(id, format!("Movie {}", id)))
            .collect();
        self.credits.insert(actor_id, movies);
        self
    }

    /// Every lookup for this id fails as if the remote answered 503
    pub fn failing(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self, endpoint: String, id: u64) -> Result<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&id) {
            return Err(LookupError::Status {
                endpoint,
                status: 503,
            });
        }
        Ok(())
    }
}

impl EntitySource for StaticSource {
    async fn movie_cast(&self, movie_id: u64) -> Result<Vec<CastMember>> {
        self.check(format!("movie/{}/credits", movie_id), movie_id)?;
        self.casts
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(format!("movie {}", movie_id)))
    }

    async fn actor_details(&self, actor_id: u64) -> Result<Actor> {
        self.check(format!("person/{}", actor_id), actor_id)?;
        self.actors
            .get(&actor_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(format!("person {}", actor_id)))
    }

    async fn actor_movie_credits(&self, actor_id: u64) -> Result<Vec<Movie>> {
        self.check(format!("person/{}/movie_credits", actor_id), actor_id)?;
        Ok(self.credits.get(&actor_id).cloned().unwrap_or_default())
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }

    async fn search_people(&self, _query: &str) -> Result<Vec<Actor>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.actors.values().cloned().collect())
    }
}

pub fn actor_node(id: u64) -> Node {
    Node {
        id: NodeId::actor(id),
        kind: NodeKind::Actor,
        label: format!("Actor {}", id),
        image_ref: None,
    }
}

pub fn movie_node(id: u64) -> Node {
    Node {
        id: NodeId::movie(id),
        kind: NodeKind::Movie,
        label: format!("Movie {}", id),
        image_ref: None,
    }
}

pub fn movie(id: u64) -> Movie {
    Movie::new(id, format!("Movie {}", id))
}

pub fn ids(raw: &[&str]) -> Vec<NodeId> {
    raw.iter().map(|s| NodeId::from(*s)).collect()
}
