//! Staff Role Repository

use super::{RepoError, RepoResult};
use shared::ErrorCode;
use shared::models::StaffRole;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<StaffRole>> {
    let roles =
        sqlx::query_as::<_, StaffRole>("SELECT id, name FROM staff_roles ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(roles)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<StaffRole>> {
    let role = sqlx::query_as::<_, StaffRole>(
        "SELECT id, name FROM staff_roles WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

/// Insert the role unless one with the same name exists
///
/// Returns the role and whether it was newly created.
pub async fn get_or_create(pool: &SqlitePool, name: &str) -> RepoResult<(StaffRole, bool)> {
    let inserted = sqlx::query("INSERT OR IGNORE INTO staff_roles (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?
        .rows_affected()
        > 0;

    let role = find_by_name(pool, name)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to create staff role {name}")))?;
    Ok((role, inserted))
}

/// Delete a role; its members go with it
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM staff_roles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::StaffRoleNotFound,
            format!("Staff role {id} not found"),
        ));
    }
    Ok(())
}
