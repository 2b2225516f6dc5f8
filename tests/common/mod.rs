//! Shared helpers for driving the router in integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use course_backend::api::router;
use course_backend::db::connect_in_memory;
use course_backend::state::AppState;

pub async fn test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test db")
}

pub fn build_test_app(pool: SqlitePool) -> Router {
    router(AppState { db: pool })
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "PUT", uri, Some(body)).await
}

/// Creates a course through the API and returns its id.
pub async fn create_course(app: Router, title: &str) -> i64 {
    let (status, json) = post_json(
        app,
        "/courses",
        &serde_json::json!({ "title": title, "description": "Course outline" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().unwrap()
}
