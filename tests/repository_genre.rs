use movie_catalog::domain::entities::{Director, Genre, NewDirector, NewGenre, NewMovie};
use movie_catalog::domain::repositories::Repository;
use movie_catalog::error::AppError;
use movie_catalog::infrastructure::persistence::{
    PgDirectorRepository, PgGenreRepository, PgMovieRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_genre_lifecycle(pool: PgPool) {
    let repo = PgGenreRepository::new(Arc::new(pool));

    let genre = repo
        .create(NewGenre {
            name: "Western".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(repo.get_one(genre.id).await.unwrap().name, "Western");

    repo.update(Genre::new(genre.id, "Neo-western".to_string()))
        .await
        .unwrap();
    assert_eq!(repo.get_one(genre.id).await.unwrap().name, "Neo-western");

    repo.delete(genre.id).await.unwrap();
    assert!(matches!(
        repo.get_one(genre.id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_update_missing_director_is_not_found(pool: PgPool) {
    let repo = PgDirectorRepository::new(Arc::new(pool));

    let result = repo.update(Director::new(100, "nobody".to_string())).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_deleting_director_clears_movie_reference(pool: PgPool) {
    let pool = Arc::new(pool);
    let directors = PgDirectorRepository::new(pool.clone());
    let movies = PgMovieRepository::new(pool);

    let director = directors
        .create(NewDirector {
            name: "test".to_string(),
        })
        .await
        .unwrap();
    let movie = movies
        .create(NewMovie {
            title: "test".to_string(),
            director_id: Some(director.id),
            ..Default::default()
        })
        .await
        .unwrap();

    directors.delete(director.id).await.unwrap();

    assert_eq!(movies.get_one(movie.id).await.unwrap().director_id, None);
}
