//! Repository trait shared by every catalog entity.

use crate::domain::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// Data access contract for one catalog entity.
///
/// The services treat implementations as opaque: whatever error a method
/// returns is passed on to the caller without translation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMovieRepository`],
///   [`crate::infrastructure::persistence::PgGenreRepository`],
///   [`crate::infrastructure::persistence::PgDirectorRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_one(&self, id: i64) -> Result<E, AppError>;

    /// Fetches every record, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_all(&self) -> Result<Vec<E>, AppError>;

    /// Replaces the stored record that has the same id as `record`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, record: E) -> Result<(), AppError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Stores a new record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, draft: E::Draft) -> Result<E, AppError>;
}
