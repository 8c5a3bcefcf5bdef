//! Repository trait definitions for the domain layer.
//!
//! The catalog has a single repository contract, [`Repository`], generic over
//! the entity it stores. Concrete implementations live in
//! `crate::infrastructure::persistence`; a `mockall` mock is generated for
//! unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod catalog_repository;

pub use catalog_repository::Repository;

#[cfg(test)]
pub use catalog_repository::MockRepository;
