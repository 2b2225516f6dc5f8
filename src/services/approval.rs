use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Course, CourseState, CourseStatistics, Decision};

/// Admin approval of pending courses.
///
/// A decision is applied with a conditional write on the current state, so of
/// two concurrent decisions on the same course only one takes effect and the
/// other reports an invalid state.
pub struct ApprovalWorkflow {
    db: SqlitePool,
}

impl ApprovalWorkflow {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn approve(&self, id: i64) -> Result<Course, AppError> {
        self.decide(id, Decision::Approve).await
    }

    pub async fn reject(&self, id: i64) -> Result<Course, AppError> {
        self.decide(id, Decision::Reject).await
    }

    pub async fn list_pending(&self) -> Result<Vec<Course>, AppError> {
        let courses = repository::fetch_courses_by_state(&self.db, CourseState::Pending).await?;
        Ok(courses)
    }

    /// Counts pending, active and rejected courses. Other states are not
    /// reported.
    pub async fn statistics(&self) -> Result<CourseStatistics, AppError> {
        let mut stats = CourseStatistics::default();

        for (state, count) in repository::count_courses_by_state(&self.db).await? {
            match state {
                CourseState::Pending => stats.pending = count,
                CourseState::Active => stats.active = count,
                CourseState::Rejected => stats.rejected = count,
                CourseState::Inactive | CourseState::Completed | CourseState::Cancelled => {}
            }
        }

        Ok(stats)
    }

    async fn decide(&self, id: i64, decision: Decision) -> Result<Course, AppError> {
        let mut course = repository::find_course_by_id(&self.db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let target = course.state.decide(decision)?;

        let applied =
            repository::transition_course_state(&self.db, id, course.state, target).await?;
        if !applied {
            warn!("course {} changed while applying {:?}", id, decision);
            return match repository::find_course_by_id(&self.db, id).await? {
                Some(current) => Err(current.state.not_pending_error()),
                None => Err(AppError::NotFound),
            };
        }

        info!("course {} moved {} -> {}", id, course.state, target);
        course.state = target;
        Ok(course)
    }
}
