use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Course, CourseState, Role, UpdateCourseRequest, ValidCourse};

const COURSE_COLUMNS: &str = "id, title, description, state, updated_at";

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
    ))
    .fetch_all(db)
    .await
}

pub async fn fetch_courses_by_state(
    db: &SqlitePool,
    state: CourseState,
) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses WHERE state = ?1 ORDER BY id"
    ))
    .bind(state)
    .fetch_all(db)
    .await
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_course(db: &SqlitePool, course: ValidCourse) -> Result<Course, sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    let id = sqlx::query(
        r#"
        INSERT INTO courses (title, description, state, updated_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&course.title)
    .bind(&course.description)
    .bind(course.state)
    .bind(&now)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Course {
        id,
        title: course.title,
        description: course.description,
        state: course.state,
        updated_at: now,
    })
}

/// Overwrites the supplied fields of an existing course. Absent fields keep
/// their stored value. No transition rule is applied to `state`.
pub async fn update_course(
    db: &SqlitePool,
    id: i64,
    req: UpdateCourseRequest,
) -> Result<Option<Course>, sqlx::Error> {
    let mut current = match find_course_by_id(db, id).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    if let Some(title) = req.title {
        current.title = title;
    }
    if let Some(description) = req.description {
        current.description = description;
    }
    if let Some(state) = req.state {
        current.state = state;
    }
    current.updated_at = Utc::now().to_rfc3339();

    let affected = sqlx::query(
        r#"
        UPDATE courses
        SET title = ?1,
            description = ?2,
            state = ?3,
            updated_at = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&current.title)
    .bind(&current.description)
    .bind(current.state)
    .bind(&current.updated_at)
    .bind(id)
    .execute(db)
    .await?
    .rows_affected();

    // deleted between the read and the write
    if affected == 0 {
        return Ok(None);
    }

    Ok(Some(current))
}

pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

/// Moves a course to `to` only if it is still in `from`.
/// Returns false when the row is gone or its state has changed.
pub async fn transition_course_state(
    db: &SqlitePool,
    id: i64,
    from: CourseState,
    to: CourseState,
) -> Result<bool, sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    let result = sqlx::query(
        r#"
        UPDATE courses
        SET state = ?1,
            updated_at = ?2
        WHERE id = ?3 AND state = ?4
        "#,
    )
    .bind(to)
    .bind(now)
    .bind(id)
    .bind(from)
    .execute(db)
    .await?
    .rows_affected();

    Ok(result > 0)
}

pub async fn count_courses_by_state(
    db: &SqlitePool,
) -> Result<Vec<(CourseState, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (CourseState, i64)>(
        "SELECT state, COUNT(*) FROM courses GROUP BY state",
    )
    .fetch_all(db)
    .await
}

pub async fn find_role_by_name(db: &SqlitePool, role_name: &str) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>("SELECT id, role_name FROM roles WHERE role_name = ?1")
        .bind(role_name)
        .fetch_optional(db)
        .await
}

pub async fn insert_role(db: &SqlitePool, role_name: &str) -> Result<Role, sqlx::Error> {
    let id = sqlx::query("INSERT INTO roles (role_name) VALUES (?1)")
        .bind(role_name)
        .execute(db)
        .await?
        .last_insert_rowid();

    Ok(Role {
        id,
        role_name: role_name.to_string(),
    })
}

pub async fn fetch_roles(db: &SqlitePool) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>("SELECT id, role_name FROM roles ORDER BY id")
        .fetch_all(db)
        .await
}
