//! Data Transfer Objects for API responses.
//!
//! Catalog records are serialized directly from the domain entities; only
//! responses without a domain counterpart get a dedicated DTO.

pub mod health;
