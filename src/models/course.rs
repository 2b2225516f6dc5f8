use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Lifecycle state of a course. Stored as its upper-case name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    /// Created by a teacher, waiting for an admin decision.
    #[default]
    Pending,
    /// Approved by an admin, open for enrollment.
    Active,
    Inactive,
    Completed,
    Cancelled,
    /// Turned down by an admin.
    Rejected,
}

/// Admin decision applied to a pending course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl CourseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseState::Pending => "PENDING",
            CourseState::Active => "ACTIVE",
            CourseState::Inactive => "INACTIVE",
            CourseState::Completed => "COMPLETED",
            CourseState::Cancelled => "CANCELLED",
            CourseState::Rejected => "REJECTED",
        }
    }

    /// Resolves the state an admin decision leads to.
    /// Only `Pending` courses can be decided on.
    pub fn decide(self, decision: Decision) -> Result<CourseState, AppError> {
        if self != CourseState::Pending {
            return Err(self.not_pending_error());
        }

        Ok(match decision {
            Decision::Approve => CourseState::Active,
            Decision::Reject => CourseState::Rejected,
        })
    }

    /// Error reported when a decision is attempted on a course in this state.
    pub fn not_pending_error(self) -> AppError {
        AppError::InvalidState(format!(
            "course is not pending (current state: {})",
            self
        ))
    }
}

impl fmt::Display for CourseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub state: CourseState,
    pub updated_at: String,
}

/// Body of a create request. Every field is optional on the wire so that a
/// missing title or description is reported as a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCourseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<CourseState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<CourseState>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCourse {
    pub title: String,
    pub description: String,
    pub state: CourseState,
}

impl NewCourseRequest {
    pub fn validate(self) -> Result<ValidCourse, AppError> {
        let title = required(self.title, "title")?;
        let description = required(self.description, "description")?;

        Ok(ValidCourse {
            title,
            description,
            state: self.state.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Course counts per approval bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStatistics {
    pub pending: i64,
    pub active: i64,
    pub rejected: i64,
}
