// Result filtering and ordering for search endpoints

use crate::model::{Actor, MediaType, SearchResult};
use std::cmp::Ordering;

pub const MIN_PERSON_POPULARITY: f64 = 5.0;
pub const MIN_MOVIE_POPULARITY: f64 = 10.0;

fn by_popularity_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Whether a multi-search entry is worth showing to a player
pub fn is_rankable(result: &SearchResult) -> bool {
    match result.media_type {
        MediaType::Person => {
            result.popularity > MIN_PERSON_POPULARITY && result.profile_path.is_some()
        }
        MediaType::Movie => {
            result.popularity > MIN_MOVIE_POPULARITY && result.poster_path.is_some()
        }
        MediaType::Other => false,
    }
}

/// Filter a raw multi-search page and sort it by popularity, most popular first
pub fn rank_multi(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut ranked: Vec<SearchResult> = results.into_iter().filter(is_rankable).collect();
    ranked.sort_by(|a, b| by_popularity_desc(a.popularity, b.popularity));
    ranked
}

/// Keep people that have a profile picture, most popular first
pub fn rank_people(people: Vec<Actor>) -> Vec<Actor> {
    let mut ranked: Vec<Actor> = people
        .into_iter()
        .filter(|p| p.profile_path.is_some())
        .collect();
    ranked.sort_by(|a, b| by_popularity_desc(a.popularity, b.popularity));
    ranked
}
