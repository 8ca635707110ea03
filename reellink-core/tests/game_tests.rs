// End-to-end tests for a game session

mod common;

use common::{StaticSource, ids, movie};
use reellink_core::{Game, GameError, MoveOutcome, NodeId};
use reellink_tmdb::{Actor, MediaType, SearchResult};
use std::collections::HashSet;

fn new_game() -> Game {
    Game::new(Actor::new(1, "Actor A"), Actor::new(2, "Actor B")).unwrap()
}

fn search_hit(id: u64, media_type: MediaType) -> SearchResult {
    SearchResult {
        id,
        media_type,
        name: (media_type == MediaType::Person).then(|| format!("Actor {}", id)),
        title: (media_type == MediaType::Movie).then(|| format!("Movie {}", id)),
        profile_path: None,
        poster_path: None,
        popularity: 50.0,
    }
}

// ============================================================================
// Session Setup Tests
// ============================================================================

#[test]
fn test_new_game_has_no_path() {
    let game = new_game();

    assert_eq!(game.board().node_count(), 2);
    assert!(game.path().path.is_empty());
    assert_eq!(game.connection_count(), 0);
    assert!(!game.is_solved());
    assert_eq!(game.connected_actors().len(), 2);
}

#[test]
fn test_same_seed_rejected() {
    let err = Game::new(Actor::new(1, "A"), Actor::new(1, "A")).unwrap_err();
    assert!(matches!(err, GameError::SameSeed(1)));
}

#[tokio::test]
async fn test_start_looks_up_both_seeds() {
    let source = StaticSource::new()
        .with_actor(31, "Tom Hanks")
        .with_actor(287, "Brad Pitt");

    let game = Game::start(&source, 31, 287).await.unwrap();

    let (a, b) = game.seeds();
    assert_eq!(a.name, "Tom Hanks");
    assert_eq!(b.name, "Brad Pitt");
    assert_eq!(source.lookup_count(), 2);
}

#[tokio::test]
async fn test_start_with_unknown_seed_fails() {
    let source = StaticSource::new().with_actor(31, "Tom Hanks");

    let result = Game::start(&source, 31, 999).await;

    assert!(matches!(result, Err(GameError::Lookup(_))));
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_shared_movie_connects_seeds() {
    let source = StaticSource::new().with_cast(10, &[1, 2]);
    let mut game = new_game();

    let outcome = game.select_movie(&source, &movie(10)).await.unwrap();

    assert!(outcome.is_connected());
    assert!(game.board().has_edge(&NodeId::actor(1), &NodeId::movie(10)));
    assert!(game.board().has_edge(&NodeId::actor(2), &NodeId::movie(10)));
    assert_eq!(game.path().path, ids(&["1", "movie-10", "2"]));
    assert_eq!(game.connection_count(), 1);
}

#[tokio::test]
async fn test_partial_cast_overlap_grows_connected_set() {
    let source = StaticSource::new().with_cast(20, &[1, 3]);
    let mut game = new_game();

    let outcome = game.select_movie(&source, &movie(20)).await.unwrap();

    match outcome {
        MoveOutcome::Connected {
            summary,
            newly_connected,
        } => {
            assert_eq!(summary.nodes_added, 1);
            assert_eq!(summary.edges_added, 1);
            assert_eq!(newly_connected, 1);
        }
        MoveOutcome::NoConnection => panic!("movie sharing a seed must be accepted"),
    }
    assert!(game.connected_actors().contains(&NodeId::actor(3)));
    assert!(!game.is_solved());
}

#[tokio::test]
async fn test_two_step_chain() {
    let source = StaticSource::new()
        .with_cast(11, &[1, 5])
        .with_cast(12, &[5, 2]);
    let mut game = new_game();

    game.select_movie(&source, &movie(11)).await.unwrap();
    assert!(!game.is_solved());
    game.select_movie(&source, &movie(12)).await.unwrap();

    assert_eq!(game.path().path, ids(&["1", "movie-11", "5", "movie-12", "2"]));
    assert_eq!(game.connection_count(), 2);
}

#[tokio::test]
async fn test_shortcut_replaces_longer_path() {
    let source = StaticSource::new()
        .with_cast(11, &[1, 5])
        .with_cast(12, &[5, 2])
        .with_cast(13, &[2, 1]);
    let mut game = new_game();

    game.select_movie(&source, &movie(11)).await.unwrap();
    game.select_movie(&source, &movie(12)).await.unwrap();
    assert_eq!(game.connection_count(), 2);

    game.select_movie(&source, &movie(13)).await.unwrap();
    assert_eq!(game.path().path, ids(&["1", "movie-13", "2"]));
    assert_eq!(game.connection_count(), 1);
}

// ============================================================================
// Rejection and Failure Tests
// ============================================================================

#[tokio::test]
async fn test_rejected_movie_leaves_state_untouched() {
    let source = StaticSource::new().with_cast(30, &[7, 8]);
    let mut game = new_game();
    let nodes_before = game.board().node_count();
    let connected_before = game.connected_actors().len();

    let outcome = game.select_movie(&source, &movie(30)).await.unwrap();

    assert_eq!(outcome, MoveOutcome::NoConnection);
    assert_eq!(game.board().node_count(), nodes_before);
    assert_eq!(game.board().edge_count(), 0);
    assert_eq!(game.connected_actors().len(), connected_before);
    assert!(!game.connected_actors().contains(&NodeId::actor(7)));
}

#[tokio::test]
async fn test_lookup_failure_leaves_state_untouched() {
    let source = StaticSource::new().with_cast(10, &[1, 2]).failing(10);
    let mut game = new_game();

    let err = game.select_movie(&source, &movie(10)).await.unwrap_err();

    assert!(matches!(err, GameError::Lookup(_)));
    assert_eq!(game.board().node_count(), 2);
    assert!(!game.is_solved());
}

#[tokio::test]
async fn test_connected_set_is_monotonic() {
    let source = StaticSource::new()
        .with_cast(11, &[1, 5, 6])
        .with_cast(12, &[9])
        .with_cast(13, &[6, 7]);
    let mut game = new_game();
    let mut previous: HashSet<NodeId> = game.connected_actors().ids().cloned().collect();

    for movie_id in [11, 12, 13, 11] {
        game.select_movie(&source, &movie(movie_id)).await.unwrap();
        let current: HashSet<NodeId> = game.connected_actors().ids().cloned().collect();
        assert!(current.is_superset(&previous));
        previous = current;
    }
    assert_eq!(previous.len(), 5);
}

// ============================================================================
// Search Selection Tests
// ============================================================================

#[tokio::test]
async fn test_select_dispatches_on_media_type() {
    let source = StaticSource::new()
        .with_cast(10, &[1, 4])
        .with_credits(2, &[10]);
    let mut game = new_game();

    game.select(&source, &search_hit(10, MediaType::Movie))
        .await
        .unwrap();
    let outcome = game
        .select(&source, &search_hit(2, MediaType::Person))
        .await
        .unwrap();

    assert!(outcome.is_connected());
    assert_eq!(game.path().path, ids(&["1", "movie-10", "2"]));
}

#[tokio::test]
async fn test_select_other_media_unsupported() {
    let source = StaticSource::new();
    let mut game = new_game();

    let err = game
        .select(&source, &search_hit(5, MediaType::Other))
        .await
        .unwrap_err();

    assert!(matches!(err, GameError::UnsupportedSelection));
    assert_eq!(source.lookup_count(), 0);
}

#[test]
fn test_filter_hides_connected_people() {
    let game = new_game();
    let results = vec![
        search_hit(1, MediaType::Person),
        search_hit(10, MediaType::Movie),
        search_hit(3, MediaType::Person),
        search_hit(4, MediaType::Other),
    ];

    let filtered = game.filter_search_results(results);

    let kept: Vec<u64> = filtered.iter().map(|r| r.id).collect();
    assert_eq!(kept, vec![10, 3]);
}

// ============================================================================
// View and Reset Tests
// ============================================================================

#[tokio::test]
async fn test_view_highlights_path_only() {
    let source = StaticSource::new()
        .with_cast(10, &[1, 2])
        .with_cast(11, &[1, 3]);
    let mut game = new_game();
    game.select_movie(&source, &movie(11)).await.unwrap();
    game.select_movie(&source, &movie(10)).await.unwrap();

    let view = game.view();

    let highlighted: Vec<&str> = view
        .nodes
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(highlighted, vec!["1", "2", "movie-10"]);

    for edge in &view.edges {
        let on_path = edge.target == NodeId::movie(10);
        assert_eq!(edge.highlighted, on_path, "edge {}-{}", edge.source, edge.target);
    }
    assert_eq!(view.connections, 1);
}

#[tokio::test]
async fn test_reset_returns_to_seeds() {
    let source = StaticSource::new().with_cast(10, &[1, 2, 3]);
    let mut game = new_game();
    game.select_movie(&source, &movie(10)).await.unwrap();
    assert!(game.is_solved());

    game.reset();

    assert_eq!(game.board().node_count(), 2);
    assert_eq!(game.connected_actors().len(), 2);
    assert!(!game.is_solved());
}
