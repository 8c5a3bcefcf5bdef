//! In-memory repository used by tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Entity;
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;

struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

/// Repository keeping records in a process-local ordered map.
///
/// Ids are assigned sequentially, starting after the largest seeded id.
/// Not-found semantics match the PostgreSQL repositories.
pub struct MemoryRepository<E: Entity> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a repository pre-populated with `records`.
    ///
    /// Records sharing an id overwrite each other; the last one wins.
    pub fn with_records(records: Vec<E>) -> Self {
        let rows: BTreeMap<i64, E> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = rows.keys().next_back().map_or(1, |last| last + 1);

        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    fn not_found(id: i64) -> AppError {
        AppError::not_found(
            format!("{} not found", E::KIND),
            json!({ "entity": E::KIND, "id": id }),
        )
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get_one(&self, id: i64) -> Result<E, AppError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn get_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, record: E) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(Self::not_found(record.id())),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: E::Draft) -> Result<E, AppError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let record = E::from_draft(id, draft);
        table.rows.insert(id, record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Genre, Movie, NewGenre, NewMovie};

    #[tokio::test]
    async fn test_get_one_and_not_found() {
        let repo = MemoryRepository::with_records(vec![Genre::new(1, "test".to_string())]);

        assert_eq!(repo.get_one(1).await.unwrap().name, "test");
        assert!(matches!(
            repo.get_one(100).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_all_is_ordered_by_id() {
        let repo = MemoryRepository::with_records(vec![
            Genre::new(3, "c".to_string()),
            Genre::new(1, "a".to_string()),
            Genre::new(2, "b".to_string()),
        ]);

        let ids: Vec<i64> = repo.get_all().await.unwrap().iter().map(|g| g.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_assigns_ids_after_seeded_records() {
        let repo = MemoryRepository::with_records(vec![Genre::new(5, "seed".to_string())]);

        let created = repo
            .create(NewGenre {
                name: "new".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_on_empty_starts_at_one() {
        let repo = MemoryRepository::<Movie>::new();

        let created = repo
            .create(NewMovie {
                title: "test".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = MemoryRepository::with_records(vec![Genre::new(1, "test".to_string())]);

        repo.update(Genre::new(1, "changed".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.get_one(1).await.unwrap().name, "changed");
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let repo = MemoryRepository::<Genre>::new();

        let result = repo.update(Genre::new(1, "ghost".to_string())).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryRepository::with_records(vec![Genre::new(1, "test".to_string())]);

        repo.delete(1).await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(matches!(repo.delete(1).await, Err(AppError::NotFound { .. })));
    }
}
