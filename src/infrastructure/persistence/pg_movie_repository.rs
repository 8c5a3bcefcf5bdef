//! PostgreSQL implementation of the movie repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Movie, NewMovie};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    description: Option<String>,
    trailer: Option<String>,
    year: Option<i32>,
    rating: Option<f64>,
    genre_id: Option<i64>,
    director_id: Option<i64>,
}

impl From<MovieRow> for Movie {
    fn from(r: MovieRow) -> Self {
        Movie::new(
            r.id,
            r.title,
            r.description,
            r.trailer,
            r.year,
            r.rating,
            r.genre_id,
            r.director_id,
        )
    }
}

/// PostgreSQL repository for movies.
pub struct PgMovieRepository {
    pool: Arc<PgPool>,
}

impl PgMovieRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Movie> for PgMovieRepository {
    async fn get_one(&self, id: i64) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, description, trailer, year, rating, genre_id, director_id
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Movie::from)
            .ok_or_else(|| AppError::not_found("Movie not found", json!({ "id": id })))
    }

    async fn get_all(&self) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, description, trailer, year, rating, genre_id, director_id
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn update(&self, record: Movie) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE movies SET
                title       = $2,
                description = $3,
                trailer     = $4,
                year        = $5,
                rating      = $6,
                genre_id    = $7,
                director_id = $8
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.trailer)
        .bind(record.year)
        .bind(record.rating)
        .bind(record.genre_id)
        .bind(record.director_id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Movie not found",
                json!({ "id": record.id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Movie not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn create(&self, draft: NewMovie) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            INSERT INTO movies (title, description, trailer, year, rating, genre_id, director_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, trailer, year, rating, genre_id, director_id
            "#,
        )
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.trailer)
        .bind(draft.year)
        .bind(draft.rating)
        .bind(draft.genre_id)
        .bind(draft.director_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
