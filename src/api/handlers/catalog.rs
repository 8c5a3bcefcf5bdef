//! Handlers for the catalog collections (`/movies`, `/genres`, `/directors`).
//!
//! Every handler is generic over the entity and pulls the matching service
//! out of [`AppState`](crate::state::AppState) through
//! [`axum::extract::FromRef`]. Routes instantiate them per entity in
//! [`crate::api::routes`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::application::services::CatalogService;
use crate::domain::entities::Entity;
use crate::domain::patch::Patch;
use crate::error::AppError;

/// Service handle stored in the router state for entity `E`.
pub type SharedService<E> = Arc<CatalogService<E>>;

/// Lists every record of the collection.
///
/// # Endpoint
///
/// `GET /{collection}`
pub async fn list_handler<E: Entity>(
    State(service): State<SharedService<E>>,
) -> Result<Json<Vec<E>>, AppError> {
    Ok(Json(service.get_all().await?))
}

/// Returns a single record.
///
/// # Endpoint
///
/// `GET /{collection}/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn get_handler<E: Entity>(
    Path(id): Path<i64>,
    State(service): State<SharedService<E>>,
) -> Result<Json<E>, AppError> {
    Ok(Json(service.get_one(id).await?))
}

/// Creates a record.
///
/// # Endpoint
///
/// `POST /{collection}`
///
/// Responds with 201, the created record, and a `Location` header pointing at
/// it. Unknown keys in the body are ignored; no other validation is applied.
pub async fn create_handler<E: Entity>(
    State(service): State<SharedService<E>>,
    Json(draft): Json<E::Draft>,
) -> Result<impl IntoResponse, AppError> {
    let created = service.create(draft).await?;
    let location = format!("/{}/{}", E::COLLECTION, created.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replaces a record in full.
///
/// # Endpoint
///
/// `PUT /{collection}/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn update_handler<E: Entity>(
    Path(id): Path<i64>,
    State(service): State<SharedService<E>>,
    Json(draft): Json<E::Draft>,
) -> Result<StatusCode, AppError> {
    service.update(E::from_draft(id, draft)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partially updates a record.
///
/// # Endpoint
///
/// `PATCH /{collection}/{id}`
///
/// The path id overrides any `id` in the body. Keys outside the entity's
/// updatable fields are silently ignored.
///
/// ```json
/// { "rating": 8.5, "unknown": "dropped" }
/// ```
///
/// # Errors
///
/// Returns 400 if an updatable field has a value of the wrong type.
/// Returns 404 if the record does not exist.
pub async fn patch_handler<E: Entity>(
    Path(id): Path<i64>,
    State(service): State<SharedService<E>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<StatusCode, AppError> {
    let patch = Patch::from(fields).with_id(id);

    service.partially_update(patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a record.
///
/// # Endpoint
///
/// `DELETE /{collection}/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn delete_handler<E: Entity>(
    Path(id): Path<i64>,
    State(service): State<SharedService<E>>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
