//! PostgreSQL implementation of the genre repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

/// PostgreSQL repository for genres.
///
/// Deleting a genre leaves its movies in place with `genre_id` cleared
/// (`ON DELETE SET NULL`).
pub struct PgGenreRepository {
    pool: Arc<PgPool>,
}

impl PgGenreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Genre> for PgGenreRepository {
    async fn get_one(&self, id: i64) -> Result<Genre, AppError> {
        let row = sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| Genre::new(r.id, r.name))
            .ok_or_else(|| AppError::not_found("Genre not found", json!({ "id": id })))
    }

    async fn get_all(&self) -> Result<Vec<Genre>, AppError> {
        let rows = sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|r| Genre::new(r.id, r.name)).collect())
    }

    async fn update(&self, record: Genre) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE genres SET name = $2 WHERE id = $1")
            .bind(record.id)
            .bind(&record.name)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Genre not found",
                json!({ "id": record.id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Genre not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn create(&self, draft: NewGenre) -> Result<Genre, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(draft.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Genre::new(row.id, row.name))
    }
}
