//! Movie entity.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A movie in the catalog.
///
/// Everything except the title is optional. `genre_id` and `director_id`
/// reference [`super::Genre`] and [`super::Director`] records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

impl Movie {
    /// Creates a new Movie instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        description: Option<String>,
        trailer: Option<String>,
        year: Option<i32>,
        rating: Option<f64>,
        genre_id: Option<i64>,
        director_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            trailer,
            year,
            rating,
            genre_id,
            director_id,
        }
    }
}

/// Input data for creating a new movie.
///
/// No validation is applied beyond the field types; storage constraints
/// (such as dangling `genre_id`) surface as repository errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

impl Entity for Movie {
    type Draft = NewMovie;

    const KIND: &'static str = "movie";
    const COLLECTION: &'static str = "movies";
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "trailer",
        "year",
        "rating",
        "genre_id",
        "director_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewMovie) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            trailer: draft.trailer,
            year: draft.year,
            rating: draft.rating,
            genre_id: draft.genre_id,
            director_id: draft.director_id,
        }
    }
}
