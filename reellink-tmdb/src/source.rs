use crate::error::Result;
use crate::model::{Actor, CastMember, Movie, SearchResult};
use std::future::Future;

/// Read access to actor and movie records.
///
/// Search methods return results already filtered and ranked; callers must
/// not re-order them.
pub trait EntitySource {
    fn movie_cast(&self, movie_id: u64) -> impl Future<Output = Result<Vec<CastMember>>> + Send;

    fn actor_details(&self, actor_id: u64) -> impl Future<Output = Result<Actor>> + Send;

    fn actor_movie_credits(&self, actor_id: u64)
    -> impl Future<Output = Result<Vec<Movie>>> + Send;

    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>>> + Send;

    fn search_people(&self, query: &str) -> impl Future<Output = Result<Vec<Actor>>> + Send;
}
