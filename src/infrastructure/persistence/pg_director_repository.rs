//! PostgreSQL implementation of the director repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Director, NewDirector};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct DirectorRow {
    id: i64,
    name: String,
}

/// PostgreSQL repository for directors.
///
/// Deleting a director leaves its movies in place with `director_id` cleared
/// (`ON DELETE SET NULL`).
pub struct PgDirectorRepository {
    pool: Arc<PgPool>,
}

impl PgDirectorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Director> for PgDirectorRepository {
    async fn get_one(&self, id: i64) -> Result<Director, AppError> {
        let row = sqlx::query_as::<_, DirectorRow>("SELECT id, name FROM directors WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| Director::new(r.id, r.name))
            .ok_or_else(|| AppError::not_found("Director not found", json!({ "id": id })))
    }

    async fn get_all(&self) -> Result<Vec<Director>, AppError> {
        let rows = sqlx::query_as::<_, DirectorRow>("SELECT id, name FROM directors ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|r| Director::new(r.id, r.name)).collect())
    }

    async fn update(&self, record: Director) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE directors SET name = $2 WHERE id = $1")
            .bind(record.id)
            .bind(&record.name)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Director not found",
                json!({ "id": record.id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Director not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn create(&self, draft: NewDirector) -> Result<Director, AppError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            "INSERT INTO directors (name) VALUES ($1) RETURNING id, name",
        )
        .bind(draft.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Director::new(row.id, row.name))
    }
}
