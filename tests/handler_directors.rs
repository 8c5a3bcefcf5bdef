mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_directors_list() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/directors").await;

    response.assert_status_ok();

    let items = response.json::<Value>();
    assert_eq!(items.as_array().unwrap().len(), 2);
    assert_eq!(items[1]["name"], "test2");
}

#[tokio::test]
async fn test_director_get_one_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/directors/100").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_director_patch() {
    let server = common::make_server(common::create_test_state());

    server
        .patch("/directors/1")
        .json(&json!({ "name": "changed_test" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        server.get("/directors/1").await.json::<Value>(),
        json!({ "id": 1, "name": "changed_test" })
    );
}

#[tokio::test]
async fn test_director_patch_only_invalid_fields() {
    let server = common::make_server(common::create_test_state());

    server
        .patch("/directors/1")
        .json(&json!({ "error": "error" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        server.get("/directors/1").await.json::<Value>(),
        json!({ "id": 1, "name": "test" })
    );
}

#[tokio::test]
async fn test_director_delete() {
    let server = common::make_server(common::create_test_state());

    server
        .delete("/directors/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete("/directors/1")
        .await
        .assert_status_not_found();
}
