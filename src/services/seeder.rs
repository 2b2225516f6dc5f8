use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::repository;
use crate::error::AppError;
use crate::models::RoleName;

/// Inserts every role in [`RoleName::ALL`] that is not stored yet.
/// Returns the number of roles created; a second run creates none.
pub async fn seed_roles(db: &SqlitePool) -> Result<usize, AppError> {
    let mut created = 0;

    for role in RoleName::ALL {
        if repository::find_role_by_name(db, role.as_str()).await?.is_some() {
            debug!("role {} already present", role.as_str());
            continue;
        }
        repository::insert_role(db, role.as_str()).await?;
        created += 1;
    }

    info!("role seeding finished, {} created", created);
    Ok(created)
}
