//! Genre entity.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A movie genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Input data for creating a new genre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGenre {
    pub name: String,
}

impl Entity for Genre {
    type Draft = NewGenre;

    const KIND: &'static str = "genre";
    const COLLECTION: &'static str = "genres";
    const FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewGenre) -> Self {
        Self::new(id, draft.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_from_draft() {
        let genre = Genre::from_draft(3, NewGenre {
            name: "Drama".to_string(),
        });

        assert_eq!(genre, Genre::new(3, "Drama".to_string()));
        assert_eq!(genre.id(), 3);
    }
}
