//! Shared application state injected into every handler.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::api::handlers::SharedService;
use crate::application::services::CatalogService;
use crate::domain::entities::{Director, Genre, Movie};
use crate::domain::repositories::Repository;

/// Services for every catalog entity.
///
/// Repositories are type-erased so the same state works over PostgreSQL and
/// in-memory storage.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: SharedService<Movie>,
    pub genre_service: SharedService<Genre>,
    pub director_service: SharedService<Director>,
}

impl AppState {
    /// Builds the state from one repository per entity.
    pub fn new(
        movies: Arc<dyn Repository<Movie>>,
        genres: Arc<dyn Repository<Genre>>,
        directors: Arc<dyn Repository<Director>>,
    ) -> Self {
        Self {
            movie_service: Arc::new(CatalogService::new(movies)),
            genre_service: Arc::new(CatalogService::new(genres)),
            director_service: Arc::new(CatalogService::new(directors)),
        }
    }
}

impl FromRef<AppState> for SharedService<Movie> {
    fn from_ref(state: &AppState) -> Self {
        state.movie_service.clone()
    }
}

impl FromRef<AppState> for SharedService<Genre> {
    fn from_ref(state: &AppState) -> Self {
        state.genre_service.clone()
    }
}

impl FromRef<AppState> for SharedService<Director> {
    fn from_ref(state: &AppState) -> Self {
        state.director_service.clone()
    }
}
