//! Director entity.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A movie director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

impl Director {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Input data for creating a new director.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDirector {
    pub name: String,
}

impl Entity for Director {
    type Draft = NewDirector;

    const KIND: &'static str = "director";
    const COLLECTION: &'static str = "directors";
    const FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewDirector) -> Self {
        Self::new(id, draft.name)
    }
}
