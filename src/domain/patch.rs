//! Partial update payloads and the field-level merge policy.
//!
//! A [`Patch`] is a loose JSON object coming from a caller. Merging it into a
//! stored record follows one rule: a key is applied only if it belongs to the
//! entity's Allowed Field Set ([`Entity::FIELDS`]). Every other key, `id`
//! included, is dropped without error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::entities::Entity;
use crate::error::AppError;

/// Requested changes to a single record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(Map<String, Value>);

impl Patch {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the target record id, if the payload carries an integer `id`.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// Sets the target record id, replacing any id already in the payload.
    pub fn with_id(mut self, id: i64) -> Self {
        self.0.insert("id".to_string(), Value::from(id));
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Keys that [`Self::merge_into`] would drop for entity `E`.
    pub fn unrecognized_fields<E: Entity>(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| *key != "id" && !E::FIELDS.iter().any(|field| field == key))
            .collect()
    }

    /// Overwrites the allowed fields of `record` with the values in this patch.
    ///
    /// The record's `id` is never touched. A patch without any recognized key
    /// returns the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a recognized field carries a value
    /// of the wrong type (e.g. a string for `year`).
    pub fn merge_into<E: Entity>(&self, record: E) -> Result<E, AppError> {
        let mut merged = match serde_json::to_value(&record) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) | Err(_) => {
                return Err(AppError::internal(
                    "Record is not representable as an object",
                    json!({ "entity": E::KIND, "id": record.id() }),
                ));
            }
        };

        for field in E::FIELDS {
            if let Some(value) = self.0.get(*field) {
                merged.insert((*field).to_string(), value.clone());
            }
        }

        let ignored = self.unrecognized_fields::<E>();
        if !ignored.is_empty() {
            tracing::debug!(
                entity = E::KIND,
                id = record.id(),
                ?ignored,
                "Ignoring unrecognized fields in partial update"
            );
        }

        serde_json::from_value(Value::Object(merged)).map_err(|e| {
            AppError::bad_request(
                "Invalid field value in partial update",
                json!({ "entity": E::KIND, "reason": e.to_string() }),
            )
        })
    }
}

impl From<Map<String, Value>> for Patch {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl TryFrom<Value> for Patch {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::bad_request(
                "Partial update payload must be a JSON object",
                json!({ "received": other }),
            )),
        }
    }
}
