mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_json() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, body) =
        common::post_json(app, "/api/users", json!({ "username": "fcc_test" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc_test");
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_form() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, body) = common::post_form(app, "/api/users", "username=fcc_test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc_test");
}

#[tokio::test]
async fn test_create_user_missing_username() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, body) = common::post_json(app, "/api/users", json!({})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/users")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from("{\"username\":"))
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_user_blank_username() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let (status, body) = common::post_form(app, "/api/users", "username=%20%20").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());

    let (_, list) = common::get(common::create_test_app(pool), "/api/users").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_created_user_appears_in_list() {
    let pool = common::setup_test_db();

    let (_, created) = common::post_json(
        common::create_test_app(pool.clone()),
        "/api/users",
        json!({ "username": "fcc_test" }),
    )
    .await;

    let (status, list) = common::get(common::create_test_app(pool), "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = list.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0], created);
}

#[tokio::test]
async fn test_list_users_in_insertion_order() {
    let pool = common::setup_test_db();
    common::create_test_user(&pool, "zoe").await;
    common::create_test_user(&pool, "adam").await;
    common::create_test_user(&pool, "zoe").await;

    let (status, list) = common::get(common::create_test_app(pool), "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["zoe", "adam", "zoe"]);

    for user in list.as_array().unwrap() {
        let keys: Vec<&String> = user.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(user.get("id").is_some());
    }
}

#[tokio::test]
async fn test_list_users_empty() {
    let pool = common::setup_test_db();

    let (status, list) = common::get(common::create_test_app(pool), "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}
