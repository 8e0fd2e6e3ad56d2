//! Staff Member Repository

use super::{RepoError, RepoResult};
use shared::ErrorCode;
use shared::models::StaffMember;
use sqlx::SqlitePool;

const SELECT_MEMBER: &str = "SELECT m.id, m.name, m.role_id, r.name AS role_name \
     FROM staff_members m JOIN staff_roles r ON r.id = m.role_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<StaffMember>> {
    let staff = sqlx::query_as::<_, StaffMember>(&format!("{SELECT_MEMBER} ORDER BY m.name, m.id"))
        .fetch_all(pool)
        .await?;
    Ok(staff)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<StaffMember>> {
    let member = sqlx::query_as::<_, StaffMember>(&format!("{SELECT_MEMBER} WHERE m.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(member)
}

/// Staff not assigned to any Pending or In Progress demand
pub async fn find_available(pool: &SqlitePool) -> RepoResult<Vec<StaffMember>> {
    let staff = sqlx::query_as::<_, StaffMember>(&format!(
        "{SELECT_MEMBER} WHERE NOT EXISTS (\
             SELECT 1 FROM demands d \
             WHERE d.assigned_to = m.id AND d.status != 'Completed'\
         ) ORDER BY m.name, m.id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(staff)
}

pub async fn is_busy(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let busy: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM demands WHERE assigned_to = ? AND status != 'Completed')",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(busy)
}

pub async fn create(pool: &SqlitePool, name: &str, role_id: i64) -> RepoResult<StaffMember> {
    let id: Option<i64> = sqlx::query_scalar(
        "INSERT INTO staff_members (name, role_id) \
         SELECT ?, id FROM staff_roles WHERE id = ? RETURNING id",
    )
    .bind(name)
    .bind(role_id)
    .fetch_optional(pool)
    .await?;

    let id = id.ok_or_else(|| {
        RepoError::Business(ErrorCode::StaffRoleNotFound, "Invalid role.".to_string())
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create staff member".into()))
}

/// Find a member by name within a role, creating it when absent
pub async fn get_or_create(
    pool: &SqlitePool,
    name: &str,
    role_id: i64,
) -> RepoResult<(StaffMember, bool)> {
    let existing = sqlx::query_as::<_, StaffMember>(&format!(
        "{SELECT_MEMBER} WHERE m.name = ? AND m.role_id = ? ORDER BY m.id LIMIT 1"
    ))
    .bind(name)
    .bind(role_id)
    .fetch_optional(pool)
    .await?;

    match existing {
        Some(member) => Ok((member, false)),
        None => Ok((create(pool, name, role_id).await?, true)),
    }
}

/// Delete a member; demands assigned to it lose their assignee
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM staff_members WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Business(
            ErrorCode::StaffMemberNotFound,
            format!("Staff member {id} not found"),
        ));
    }
    Ok(())
}
