mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_genres_list() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/genres").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([{ "id": 1, "name": "test" }, { "id": 2, "name": "test2" }])
    );
}

#[tokio::test]
async fn test_genre_get_one() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/genres/1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "id": 1, "name": "test" }));
}

#[tokio::test]
async fn test_genre_get_one_not_found() {
    let server = common::make_server(common::create_test_state());

    server.get("/genres/100").await.assert_status_not_found();
}

#[tokio::test]
async fn test_genre_patch() {
    let server = common::make_server(common::create_test_state());

    server
        .patch("/genres/1")
        .json(&json!({ "id": 1, "name": "changed_test" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        server.get("/genres/1").await.json::<Value>(),
        json!({ "id": 1, "name": "changed_test" })
    );
}

#[tokio::test]
async fn test_genre_patch_only_invalid_fields() {
    let server = common::make_server(common::create_test_state());

    server
        .patch("/genres/1")
        .json(&json!({ "id": 1, "error": "error" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        server.get("/genres/1").await.json::<Value>(),
        json!({ "id": 1, "name": "test" })
    );
}

#[tokio::test]
async fn test_genre_create_and_delete() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/genres")
        .json(&json!({ "name": "Drama" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_header("location", "/genres/3");

    server
        .delete("/genres/3")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get("/genres/3").await.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    use axum::body::Body;
    use axum::http::Request;
    use movie_catalog::routes::app_router;
    use tower::ServiceExt;

    let response = app_router(common::create_test_state())
        .oneshot(Request::builder().uri("/genres/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert_eq!(body["checks"]["storage"]["message"], "Connected, 2 genres");
}
