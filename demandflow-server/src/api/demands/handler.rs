//! Demand API Handlers

use axum::Json;
use axum::extract::{Path, State};
use shared::models::{
    Dashboard, DemandCreate, DemandFormOptions, DemandType, DemandView, FOOD_ITEMS,
    RoleRequirement,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{demand, hotel_settings, staff_member, staff_role};
use crate::intake::{self, IntakeContext};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Form choices as of now; availability is a snapshot
async fn form_options(
    pool: &SqlitePool,
    settings: &shared::models::HotelSettings,
) -> AppResult<DemandFormOptions> {
    Ok(DemandFormOptions {
        demand_types: DemandType::ALL.to_vec(),
        food_items: FOOD_ITEMS.iter().map(|s| s.to_string()).collect(),
        locations: settings.locations(),
        available_staff: staff_member::find_available(pool).await?,
        role_requirements: DemandType::ALL
            .into_iter()
            .map(|demand_type| RoleRequirement {
                demand_type,
                role: demand_type.required_role().to_string(),
            })
            .collect(),
    })
}

async fn load_view(pool: &SqlitePool, id: i64) -> AppResult<DemandView> {
    demand::find_view_by_id(pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::DemandNotFound, format!("Demand {id} not found"))
    })
}

/// GET / - open demands plus everything the intake form needs
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<ApiResponse<Dashboard>> {
    let settings = hotel_settings::get(&state.pool).await?;
    let demands = demand::find_open(&state.pool).await?;
    let form = form_options(&state.pool, &settings).await?;

    Ok(ApiResponse::success(Dashboard {
        demands,
        form,
        settings,
    }))
}

/// POST /add/ - file a new demand (staff only)
pub async fn add(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<DemandCreate>,
) -> AppResult<ApiResponse<DemandView>> {
    let pool = &state.pool;
    let settings = hotel_settings::get(pool).await?;
    let roles = staff_role::find_all(pool).await?;

    let assignee = match payload.assigned_to {
        Some(id) => staff_member::find_by_id(pool, id).await?,
        None => None,
    };
    let assignee_busy = match &assignee {
        Some(member) => staff_member::is_busy(pool, member.id).await?,
        None => false,
    };

    let ctx = IntakeContext {
        settings: &settings,
        roles: &roles,
        assignee: assignee.as_ref(),
        assignee_busy,
    };
    let valid = intake::validate(&payload, ctx).map_err(|errors| {
        tracing::info!(user_id = current_user.id, ?errors, "Demand rejected");
        AppError::from(errors)
    })?;

    let id = demand::insert(
        pool,
        demand::NewDemand {
            demand_type: valid.demand_type,
            description: valid.description,
            quantity: valid.quantity,
            room_or_table: Some(valid.room_or_table),
            assigned_to: valid.assigned_to,
            expected_completion: valid.expected_completion,
            created_by: current_user.id,
            created_at: now_millis(),
        },
    )
    .await?;

    tracing::info!(
        demand_id = id,
        demand_type = %valid.demand_type,
        username = %current_user.username,
        "Demand added"
    );

    Ok(ApiResponse::success_with_message(
        "Demand added.",
        load_view(pool, id).await?,
    ))
}

/// POST /{id}/in-progress/ (staff only)
pub async fn mark_in_progress(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<DemandView>> {
    demand::mark_in_progress(&state.pool, id, current_user.id).await?;
    tracing::info!(demand_id = id, username = %current_user.username, "Demand in progress");

    Ok(ApiResponse::success_with_message(
        "Marked as In Progress.",
        load_view(&state.pool, id).await?,
    ))
}

/// POST /{id}/complete/ (staff only)
pub async fn mark_completed(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<DemandView>> {
    demand::mark_completed(&state.pool, id, current_user.id, now_millis()).await?;
    tracing::info!(demand_id = id, username = %current_user.username, "Demand completed");

    Ok(ApiResponse::success_with_message(
        "Marked as Completed.",
        load_view(&state.pool, id).await?,
    ))
}
