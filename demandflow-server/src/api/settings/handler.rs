//! Settings Handlers
//!
//! One POST endpoint, dispatched on the `action` field.

use axum::Json;
use axum::extract::State;
use shared::models::{SettingsAction, SettingsPage};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{hotel_settings, staff_member, staff_role};
use crate::utils::validation::{
    MAX_ROLE_NAME_LEN, MAX_STAFF_NAME_LEN, non_blank, validate_count, validate_max_len,
};
use crate::utils::{ApiResponse, AppError, AppResult};

async fn load_page(pool: &SqlitePool) -> AppResult<SettingsPage> {
    Ok(SettingsPage {
        settings: hotel_settings::get(pool).await?,
        roles: staff_role::find_all(pool).await?,
        staff: staff_member::find_all(pool).await?,
    })
}

/// GET /settings/
pub async fn show(State(state): State<ServerState>) -> AppResult<ApiResponse<SettingsPage>> {
    Ok(ApiResponse::success(load_page(&state.pool).await?))
}

/// POST /settings/ - apply one action, answer with the refreshed page
pub async fn apply(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(action): Json<SettingsAction>,
) -> AppResult<ApiResponse<SettingsPage>> {
    let pool = &state.pool;

    let notice = match action {
        SettingsAction::UpdateCounts {
            num_tables,
            num_rooms,
        } => {
            validate_count(num_tables, "num_tables")?;
            validate_count(num_rooms, "num_rooms")?;
            let settings = hotel_settings::update_counts(pool, num_tables, num_rooms).await?;
            tracing::info!(
                num_tables = settings.num_tables,
                num_rooms = settings.num_rooms,
                username = %current_user.username,
                "Location counts updated"
            );
            "Counts updated."
        }
        SettingsAction::AddRole { role_name } => {
            let name = non_blank(role_name.as_deref())
                .ok_or_else(|| AppError::validation("Role name required."))?;
            validate_max_len(name, "role_name", MAX_ROLE_NAME_LEN)?;
            let (role, created) = staff_role::get_or_create(pool, name).await?;
            tracing::info!(role_id = role.id, role = %role.name, created, "Staff role added");
            "Role added."
        }
        SettingsAction::DeleteRole { role_id } => {
            staff_role::delete(pool, role_id).await?;
            tracing::info!(role_id, username = %current_user.username, "Staff role deleted");
            "Role deleted."
        }
        SettingsAction::AddStaff {
            staff_name,
            staff_role_id,
        } => {
            let (Some(name), Some(role_id)) = (non_blank(staff_name.as_deref()), staff_role_id)
            else {
                return Err(AppError::validation("Staff name and role required."));
            };
            validate_max_len(name, "staff_name", MAX_STAFF_NAME_LEN)?;
            let member = staff_member::create(pool, name, role_id).await?;
            tracing::info!(staff_id = member.id, name = %member.name, role = %member.role_name, "Staff member added");
            "Staff added."
        }
        SettingsAction::DeleteStaff { staff_id } => {
            staff_member::delete(pool, staff_id).await?;
            tracing::info!(staff_id, username = %current_user.username, "Staff member deleted");
            "Staff deleted."
        }
    };

    Ok(ApiResponse::success_with_message(notice, load_page(pool).await?))
}
