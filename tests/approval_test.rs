//! Integration tests for the admin approval endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_approve_moves_course_to_active() {
    let pool = common::test_pool().await;
    let id = common::create_course(common::build_test_app(pool.clone()), "Statistics").await;

    let (status, json) = common::put_json(
        common::build_test_app(pool.clone()),
        &format!("/courses/approval/{id}/approve"),
        &json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Course approved");

    let (_, json) =
        common::get_json(common::build_test_app(pool.clone()), &format!("/courses/{id}")).await;
    assert_eq!(json["state"], "ACTIVE");

    // second approval is refused
    let (status, json) = common::put_json(
        common::build_test_app(pool),
        &format!("/courses/approval/{id}/approve"),
        &json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("not pending"));
}

#[tokio::test]
async fn test_reject_moves_course_to_rejected() {
    let pool = common::test_pool().await;
    let id = common::create_course(common::build_test_app(pool.clone()), "Ethics").await;

    let (status, json) = common::put_json(
        common::build_test_app(pool.clone()),
        &format!("/courses/approval/{id}/reject"),
        &json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Course rejected");

    let (_, json) =
        common::get_json(common::build_test_app(pool), &format!("/courses/{id}")).await;
    assert_eq!(json["state"], "REJECTED");
}

#[tokio::test]
async fn test_decisions_on_unknown_course_return_404() {
    let pool = common::test_pool().await;

    for action in ["approve", "reject"] {
        let (status, _) = common::put_json(
            common::build_test_app(pool.clone()),
            &format!("/courses/approval/404/{action}"),
            &json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_reject_after_direct_update_is_refused() {
    let pool = common::test_pool().await;
    let id = common::create_course(common::build_test_app(pool.clone()), "History").await;

    common::put_json(
        common::build_test_app(pool.clone()),
        &format!("/courses/{id}"),
        &json!({ "state": "COMPLETED" }),
    )
    .await;

    let (status, _) = common::put_json(
        common::build_test_app(pool),
        &format!("/courses/approval/{id}/reject"),
        &json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pending_list_and_statistics() {
    let pool = common::test_pool().await;
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        ids.push(common::create_course(common::build_test_app(pool.clone()), title).await);
    }

    let (status, json) =
        common::get_json(common::build_test_app(pool.clone()), "/courses/approval/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "pending": 3, "active": 0, "rejected": 0 }));

    common::put_json(
        common::build_test_app(pool.clone()),
        &format!("/courses/approval/{}/approve", ids[0]),
        &json!({}),
    )
    .await;
    let (_, json) =
        common::get_json(common::build_test_app(pool.clone()), "/courses/approval/statistics").await;
    assert_eq!(json, json!({ "pending": 2, "active": 1, "rejected": 0 }));

    common::put_json(
        common::build_test_app(pool.clone()),
        &format!("/courses/approval/{}/reject", ids[1]),
        &json!({}),
    )
    .await;
    let (_, json) =
        common::get_json(common::build_test_app(pool.clone()), "/courses/approval/statistics").await;
    assert_eq!(json, json!({ "pending": 1, "active": 1, "rejected": 1 }));

    let (status, json) =
        common::get_json(common::build_test_app(pool), "/courses/approval/pending").await;
    assert_eq!(status, StatusCode::OK);
    let pending = json.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], ids[2]);
    assert_eq!(pending[0]["state"], "PENDING");
}
