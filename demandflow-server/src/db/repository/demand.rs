//! Demand Repository

use super::{RepoError, RepoResult};
use shared::ErrorCode;
use shared::models::{Demand, DemandType, DemandView};
use sqlx::SqlitePool;

const SELECT_VIEW: &str = "SELECT d.id, d.demand_type, d.description, d.status, d.created_at, \
     d.expected_completion, d.completed_at, d.quantity, d.room_or_table, \
     d.created_by, c.username AS created_by_username, \
     d.fulfilled_by, f.username AS fulfilled_by_username, \
     d.assigned_to, m.name AS assigned_to_name, r.name AS assigned_role_name \
     FROM demands d \
     JOIN users c ON c.id = d.created_by \
     LEFT JOIN users f ON f.id = d.fulfilled_by \
     LEFT JOIN staff_members m ON m.id = d.assigned_to \
     LEFT JOIN staff_roles r ON r.id = m.role_id";

/// Validated demand ready to be stored as Pending
#[derive(Debug, Clone)]
pub struct NewDemand {
    pub demand_type: DemandType,
    pub description: String,
    pub quantity: Option<i64>,
    pub room_or_table: Option<String>,
    pub assigned_to: Option<i64>,
    pub expected_completion: Option<i64>,
    pub created_by: i64,
    pub created_at: i64,
}

/// Insert a Pending demand
///
/// With an assignee the insert only happens if that staff member has no open
/// demand, checked in the same statement.
pub async fn insert(pool: &SqlitePool, data: NewDemand) -> RepoResult<i64> {
    let id: Option<i64> = match data.assigned_to {
        None => Some(
            sqlx::query_scalar(
                "INSERT INTO demands (demand_type, description, status, created_at, expected_completion, created_by, quantity, room_or_table) \
                 VALUES (?1, ?2, 'Pending', ?3, ?4, ?5, ?6, ?7) RETURNING id",
            )
            .bind(data.demand_type.as_str())
            .bind(&data.description)
            .bind(data.created_at)
            .bind(data.expected_completion)
            .bind(data.created_by)
            .bind(data.quantity)
            .bind(&data.room_or_table)
            .fetch_one(pool)
            .await?,
        ),
        Some(staff_id) => {
            sqlx::query_scalar(
                "INSERT INTO demands (demand_type, description, status, created_at, expected_completion, created_by, quantity, room_or_table, assigned_to) \
                 SELECT ?1, ?2, 'Pending', ?3, ?4, ?5, ?6, ?7, ?8 \
                 WHERE NOT EXISTS (SELECT 1 FROM demands WHERE assigned_to = ?8 AND status != 'Completed') \
                 RETURNING id",
            )
            .bind(data.demand_type.as_str())
            .bind(&data.description)
            .bind(data.created_at)
            .bind(data.expected_completion)
            .bind(data.created_by)
            .bind(data.quantity)
            .bind(&data.room_or_table)
            .bind(staff_id)
            .fetch_optional(pool)
            .await?
        }
    };

    id.ok_or_else(|| {
        RepoError::Business(
            ErrorCode::AssigneeUnavailable,
            "Selected staff member is already assigned to an open demand.".to_string(),
        )
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Demand>> {
    let demand = sqlx::query_as::<_, Demand>(
        "SELECT id, demand_type, description, status, created_at, expected_completion, completed_at, \
         created_by, fulfilled_by, quantity, room_or_table, assigned_to FROM demands WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(demand)
}

pub async fn find_view_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DemandView>> {
    let demand = sqlx::query_as::<_, DemandView>(&format!("{SELECT_VIEW} WHERE d.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(demand)
}

/// Pending and In Progress demands, newest first
pub async fn find_open(pool: &SqlitePool) -> RepoResult<Vec<DemandView>> {
    let demands = sqlx::query_as::<_, DemandView>(&format!(
        "{SELECT_VIEW} WHERE d.status != 'Completed' ORDER BY d.created_at DESC, d.id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(demands)
}

/// Completed demands, most recently completed first
pub async fn find_completed(pool: &SqlitePool) -> RepoResult<Vec<DemandView>> {
    let demands = sqlx::query_as::<_, DemandView>(&format!(
        "{SELECT_VIEW} WHERE d.status = 'Completed' ORDER BY d.completed_at DESC, d.id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(demands)
}

pub async fn count_completed(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM demands WHERE status = 'Completed'")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Move a non-Completed demand to In Progress, recording the actor
pub async fn mark_in_progress(pool: &SqlitePool, id: i64, actor_id: i64) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE demands SET status = 'In Progress', fulfilled_by = ? WHERE id = ? AND status != 'Completed'",
    )
    .bind(actor_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(transition_failure(pool, id).await);
    }
    Ok(())
}

/// Complete a demand, recording the actor and stamping `completed_at` once
pub async fn mark_completed(
    pool: &SqlitePool,
    id: i64,
    actor_id: i64,
    completed_at: i64,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE demands SET status = 'Completed', fulfilled_by = ?, completed_at = ? WHERE id = ? AND status != 'Completed'",
    )
    .bind(actor_id)
    .bind(completed_at)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(transition_failure(pool, id).await);
    }
    Ok(())
}

/// Why a guarded status update touched no row
async fn transition_failure(pool: &SqlitePool, id: i64) -> RepoError {
    match find_by_id(pool, id).await {
        Ok(Some(_)) => RepoError::Business(
            ErrorCode::DemandAlreadyCompleted,
            format!("Demand {id} is already completed"),
        ),
        Ok(None) => {
            RepoError::Business(ErrorCode::DemandNotFound, format!("Demand {id} not found"))
        }
        Err(e) => e,
    }
}

/// Delete every Completed demand, returning how many went
pub async fn delete_completed(pool: &SqlitePool) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM demands WHERE status = 'Completed'")
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
