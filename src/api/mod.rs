use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::routing::put;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::models::*;
use crate::services::{ApprovalWorkflow, CourseService};
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseQueryParams {
    #[serde(default)]
    state: Option<CourseState>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/courses/approval/pending", get(list_pending_courses))
        .route("/courses/approval/statistics", get(course_statistics))
        .route("/courses/approval/{id}/approve", put(approve_course))
        .route("/courses/approval/{id}/reject", put(reject_course))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::new(state.db).list(params.state).await?;
    Ok(Json(courses))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<NewCourseRequest>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let Json(req) = payload?;
    let course = CourseService::new(state.db).create(req).await?;
    Ok(Json(course))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::new(state.db).get(id).await?;
    Ok(Json(course))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let Json(req) = payload?;
    let course = CourseService::new(state.db).update(id, req).await?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::new(state.db).delete(id).await?;
    Ok(MessageResponse::new("Course deleted"))
}

async fn list_pending_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = ApprovalWorkflow::new(state.db).list_pending().await?;
    Ok(Json(courses))
}

async fn approve_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    ApprovalWorkflow::new(state.db).approve(id).await?;
    Ok(MessageResponse::new("Course approved"))
}

async fn reject_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    ApprovalWorkflow::new(state.db).reject(id).await?;
    Ok(MessageResponse::new("Course rejected"))
}

async fn course_statistics(
    State(state): State<AppState>,
) -> Result<Json<CourseStatistics>, AppError> {
    let stats = ApprovalWorkflow::new(state.db).statistics().await?;
    Ok(Json(stats))
}
