use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference roles that must exist before requests are served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
}

impl RoleName {
    pub const ALL: [RoleName; 3] = [RoleName::Admin, RoleName::Teacher, RoleName::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "ROLE_ADMIN",
            RoleName::Teacher => "ROLE_TEACHER",
            RoleName::Student => "ROLE_STUDENT",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
}
