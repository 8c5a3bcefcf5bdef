//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgMovieRepository`], [`PgGenreRepository`], [`PgDirectorRepository`] -
//!   PostgreSQL storage via SQLx
//! - [`MemoryRepository`] - In-process storage for tests and local runs

pub mod memory_repository;
pub mod pg_director_repository;
pub mod pg_genre_repository;
pub mod pg_movie_repository;

pub use memory_repository::MemoryRepository;
pub use pg_director_repository::PgDirectorRepository;
pub use pg_genre_repository::PgGenreRepository;
pub use pg_movie_repository::PgMovieRepository;
