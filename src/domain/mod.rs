//! Domain layer containing catalog entities and the update policy.
//!
//! # Architecture
//!
//! - [`entities`] - Movie, Genre and Director records
//! - [`patch`] - Partial update payloads and the merge rule
//! - [`repositories`] - Data access trait definition
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Services that orchestrate it live in
//! [`crate::application::services`].

pub mod entities;
pub mod patch;
pub mod repositories;
