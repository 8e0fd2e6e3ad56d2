//! Debug Handlers (plain-text answers)

use axum::extract::{Query, State};
use http::HeaderMap;
use serde::Deserialize;

use crate::auth::extractor::authenticate_headers;
use crate::auth::password::verify_password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::seed::{self, VIEWER_PASSWORD, VIEWER_USERNAME};
use crate::utils::{AppError, AppResult, ErrorCode};

fn ensure_debug(state: &ServerState) -> AppResult<()> {
    if state.config.debug {
        Ok(())
    } else {
        Err(AppError::with_message(ErrorCode::DebugDisabled, "Disabled"))
    }
}

/// GET /debug/reset-viewer/ - create or reset the viewer account
pub async fn reset_viewer(State(state): State<ServerState>) -> AppResult<String> {
    ensure_debug(&state)?;
    let created = seed::ensure_viewer(&state.pool).await?;
    let verb = if created { "created" } else { "updated" };
    tracing::warn!(username = VIEWER_USERNAME, verb, "Viewer credentials reset via debug endpoint");
    Ok(format!("{VIEWER_USERNAME} {verb} with password {VIEWER_PASSWORD}"))
}

/// GET /debug/whoami/
pub async fn whoami(State(state): State<ServerState>, headers: HeaderMap) -> AppResult<String> {
    ensure_debug(&state)?;
    let answer = match authenticate_headers(&headers, &state.jwt_service) {
        Ok(Some(user)) => format!("authenticated as: {}", user.username),
        Ok(None) | Err(_) => "anonymous".to_string(),
    };
    Ok(answer)
}

#[derive(Debug, Deserialize)]
pub struct CheckViewerQuery {
    pwd: Option<String>,
}

/// GET /debug/check-viewer/?pwd=... - does the viewer exist and can it log in
pub async fn check_viewer(
    State(state): State<ServerState>,
    Query(query): Query<CheckViewerQuery>,
) -> AppResult<String> {
    ensure_debug(&state)?;
    let viewer = user::find_by_username(&state.pool, VIEWER_USERNAME)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "viewer does not exist"))?;

    let pwd = query.pwd.as_deref().unwrap_or(VIEWER_PASSWORD);
    let authenticates =
        viewer.is_active && verify_password(pwd, &viewer.hash_pass).unwrap_or(false);

    Ok([
        format!(
            "viewer exists; is_active={}; is_staff={}",
            viewer.is_active, viewer.is_staff
        ),
        format!(
            "authenticate(viewer, provided pwd) -> {}",
            if authenticates { "OK" } else { "FAILED" }
        ),
    ]
    .join("\n"))
}
