//! Core domain entities of the movie catalog.
//!
//! Entities are plain data structures. Each one is paired with a draft type
//! used for creation (the record before the storage layer assigns an id).
//!
//! # Entity Types
//!
//! - [`Movie`] - A film with optional metadata and genre/director references
//! - [`Genre`] - A named genre
//! - [`Director`] - A named director
//!
//! # Partial Updates
//!
//! Every entity declares its Allowed Field Set through [`Entity::FIELDS`].
//! [`crate::domain::patch::Patch`] uses it to decide which keys of an update
//! payload may be merged into a stored record.

pub mod director;
pub mod genre;
pub mod movie;

pub use director::{Director, NewDirector};
pub use genre::{Genre, NewGenre};
pub use movie::{Movie, NewMovie};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A persisted catalog record.
///
/// Implementors serialize to a flat JSON object whose keys are the field
/// names listed in [`Entity::FIELDS`] plus `id`.
pub trait Entity:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Fields of the record without its id.
    type Draft: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Singular name used in logs and error details (e.g. `"movie"`).
    const KIND: &'static str;

    /// Plural name used for routes and CLI commands (e.g. `"movies"`).
    const COLLECTION: &'static str;

    /// Field names a partial update may overwrite. Never contains `id`.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Builds a full record from a draft and an assigned id.
    fn from_draft(id: i64, draft: Self::Draft) -> Self;
}
