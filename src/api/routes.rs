//! API route configuration.

use crate::api::handlers::{
    SharedService, create_handler, delete_handler, get_handler, list_handler, patch_handler,
    update_handler,
};
use crate::domain::entities::{Director, Entity, Genre, Movie};
use crate::state::AppState;
use axum::{Router, extract::FromRef, routing::get};

/// Catalog routes for every entity.
///
/// # Endpoints
///
/// For each of `movies`, `genres`, `directors`:
///
/// - `GET    /{collection}`      - List records
/// - `POST   /{collection}`      - Create a record
/// - `GET    /{collection}/{id}` - Fetch a record
/// - `PUT    /{collection}/{id}` - Replace a record
/// - `PATCH  /{collection}/{id}` - Partially update a record
/// - `DELETE /{collection}/{id}` - Delete a record
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(collection_routes::<Movie>())
        .merge(collection_routes::<Genre>())
        .merge(collection_routes::<Director>())
}

fn collection_routes<E>() -> Router<AppState>
where
    E: Entity,
    SharedService<E>: FromRef<AppState>,
{
    let collection = format!("/{}", E::COLLECTION);
    let item = format!("/{}/{{id}}", E::COLLECTION);

    Router::new()
        .route(&collection, get(list_handler::<E>).post(create_handler::<E>))
        .route(
            &item,
            get(get_handler::<E>)
                .put(update_handler::<E>)
                .patch(patch_handler::<E>)
                .delete(delete_handler::<E>),
        )
}
