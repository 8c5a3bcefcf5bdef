//! Application layer services implementing catalog logic.
//!
//! Services consume the domain repository trait and give HTTP handlers and
//! the admin CLI a single entry point per entity.
//!
//! # Available Services
//!
//! - [`services::MovieService`] - Movies
//! - [`services::GenreService`] - Genres
//! - [`services::DirectorService`] - Directors
//!
//! All three are instantiations of [`services::EntityService`].

pub mod services;
