use sqlx::SqlitePool;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Course, CourseState, NewCourseRequest, UpdateCourseRequest};

/// CRUD over stored courses. Direct updates may set any state; the admin
/// decision rule is enforced only by [`crate::services::ApprovalWorkflow`].
pub struct CourseService {
    db: SqlitePool,
}

impl CourseService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: NewCourseRequest) -> Result<Course, AppError> {
        let course = req.validate()?;
        let created = repository::insert_course(&self.db, course).await?;
        info!("created course {} ({})", created.id, created.state);
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Course, AppError> {
        repository::find_course_by_id(&self.db, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update(&self, id: i64, req: UpdateCourseRequest) -> Result<Course, AppError> {
        let updated = repository::update_course(&self.db, id, req)
            .await?
            .ok_or(AppError::NotFound)?;
        info!("updated course {} ({})", updated.id, updated.state);
        Ok(updated)
    }

    pub async fn list(&self, state: Option<CourseState>) -> Result<Vec<Course>, AppError> {
        let courses = match state {
            Some(state) => repository::fetch_courses_by_state(&self.db, state).await?,
            None => repository::fetch_courses(&self.db).await?,
        };
        Ok(courses)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !repository::delete_course(&self.db, id).await? {
            return Err(AppError::NotFound);
        }
        info!("deleted course {}", id);
        Ok(())
    }
}
