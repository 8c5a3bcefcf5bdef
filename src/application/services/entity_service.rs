//! Generic catalog service shared by movies, genres and directors.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::entities::{Director, Entity, Genre, Movie};
use crate::domain::patch::Patch;
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;

/// Service mediating between callers and a catalog repository.
///
/// Reads, deletes and creates are passed straight through. The only policy
/// applied here is the partial update merge (see [`Patch::merge_into`]).
pub struct EntityService<E: Entity, R: Repository<E> + ?Sized> {
    repository: Arc<R>,
    entity: PhantomData<fn() -> E>,
}

/// Service over movies.
pub type MovieService<R> = EntityService<Movie, R>;
/// Service over genres.
pub type GenreService<R> = EntityService<Genre, R>;
/// Service over directors.
pub type DirectorService<R> = EntityService<Director, R>;

/// Service with a type-erased repository, as stored in the router state.
pub type CatalogService<E> = EntityService<E, dyn Repository<E>>;

impl<E: Entity, R: Repository<E> + ?Sized> EntityService<E, R> {
    /// Creates a new service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            entity: PhantomData,
        }
    }

    /// Retrieves a record by id.
    ///
    /// # Errors
    ///
    /// Propagates the repository error unchanged, including
    /// [`AppError::NotFound`].
    pub async fn get_one(&self, id: i64) -> Result<E, AppError> {
        self.repository.get_one(id).await
    }

    /// Retrieves every record in repository order.
    ///
    /// # Errors
    ///
    /// Propagates the repository error unchanged.
    pub async fn get_all(&self) -> Result<Vec<E>, AppError> {
        self.repository.get_all().await
    }

    /// Stores a new record.
    ///
    /// The draft is handed to the repository as-is.
    ///
    /// # Errors
    ///
    /// Propagates the repository error unchanged.
    pub async fn create(&self, draft: E::Draft) -> Result<E, AppError> {
        let created = self.repository.create(draft).await?;
        tracing::info!(entity = E::KIND, id = created.id(), "Record created");
        Ok(created)
    }

    /// Replaces a record in full.
    ///
    /// # Errors
    ///
    /// Propagates the repository error unchanged.
    pub async fn update(&self, record: E) -> Result<(), AppError> {
        self.repository.update(record).await
    }

    /// Applies a partial update.
    ///
    /// Fetches the record named by the payload's `id`, overwrites the fields
    /// of the entity's Allowed Field Set that the payload carries, and stores
    /// the result. Unrecognized keys are dropped; the store happens even when
    /// nothing was merged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload has no integer `id` or
    /// a recognized field has a value of the wrong type.
    /// Propagates repository errors unchanged.
    pub async fn partially_update(&self, patch: Patch) -> Result<(), AppError> {
        let id = patch.id().ok_or_else(|| {
            AppError::bad_request(
                "Partial update requires an id",
                json!({ "entity": E::KIND }),
            )
        })?;

        let existing = self.repository.get_one(id).await?;
        let merged = patch.merge_into(existing)?;

        self.repository.update(merged).await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Propagates the repository error unchanged.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(entity = E::KIND, id, "Record deleted");
        Ok(())
    }
}
