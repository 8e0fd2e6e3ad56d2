//! Completed Demand Handlers

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use http::header;
use serde::Serialize;
use shared::models::{ClearConfirmation, CompletedDemand};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::demand;
use crate::reports::{self, ExportRow, XLSX_CONTENT_TYPE};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// GET /completed/ - most recently completed first, with time taken
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<CompletedDemand>>> {
    let demands = demand::find_completed(&state.pool).await?;
    Ok(ApiResponse::success(
        demands.into_iter().map(reports::completed_entry).collect(),
    ))
}

/// GET /completed/export/ - xlsx download (staff only)
pub async fn export(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Response> {
    let demands = demand::find_completed(&state.pool).await?;
    let rows: Vec<ExportRow> = demands.iter().map(ExportRow::from).collect();

    let bytes = reports::build_workbook(&rows).map_err(|e| {
        AppError::with_message(ErrorCode::ExportFailed, format!("Failed to build workbook: {e}"))
    })?;
    let filename = reports::export_filename(Utc::now());

    tracing::info!(
        rows = rows.len(),
        filename = %filename,
        username = %current_user.username,
        "Completed demands exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /completed/clear/ - how many rows a clear would delete (staff only)
pub async fn confirm_clear(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<ClearConfirmation>> {
    let count = demand::count_completed(&state.pool).await?;
    Ok(ApiResponse::success(ClearConfirmation {
        count,
        prompt: format!(
            "Delete all {count} completed tasks? This cannot be undone. POST to confirm."
        ),
    }))
}

#[derive(Debug, Serialize)]
pub struct ClearResult {
    cleared: u64,
}

/// POST /completed/clear/ - delete every completed demand (staff only)
pub async fn clear(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<ApiResponse<ClearResult>> {
    let cleared = demand::delete_completed(&state.pool).await?;
    tracing::warn!(cleared, username = %current_user.username, "Completed demands cleared");

    Ok(ApiResponse::success_with_message(
        format!("Successfully cleared {cleared} completed tasks."),
        ClearResult { cleared },
    ))
}
