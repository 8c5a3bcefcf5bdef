#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use movie_catalog::api::handlers::health_handler;
use movie_catalog::api::routes::catalog_routes;
use movie_catalog::domain::entities::{Director, Genre, Movie};
use movie_catalog::infrastructure::persistence::MemoryRepository;
use movie_catalog::state::AppState;
use std::sync::Arc;

pub fn test_movie(id: i64, title: &str, rating: Option<f64>) -> Movie {
    Movie::new(id, title.to_string(), None, None, None, rating, None, None)
}

pub fn seeded_movies() -> Vec<Movie> {
    vec![
        test_movie(1, "test", Some(8.3)),
        test_movie(2, "test2", None),
    ]
}

pub fn seeded_genres() -> Vec<Genre> {
    vec![
        Genre::new(1, "test".to_string()),
        Genre::new(2, "test2".to_string()),
    ]
}

pub fn seeded_directors() -> Vec<Director> {
    vec![
        Director::new(1, "test".to_string()),
        Director::new(2, "test2".to_string()),
    ]
}

/// State over in-memory repositories seeded with two records per collection.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryRepository::with_records(seeded_movies())),
        Arc::new(MemoryRepository::with_records(seeded_genres())),
        Arc::new(MemoryRepository::with_records(seeded_directors())),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", axum::routing::get(health_handler))
        .merge(catalog_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}
