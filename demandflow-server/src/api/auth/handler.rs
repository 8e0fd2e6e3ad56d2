//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::auth::password::verify_password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /login/ - exchange credentials for a token
///
/// Unknown users, wrong passwords and disabled accounts get the same answer,
/// after the same fixed delay.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let username = req.username.trim().to_string();
    let found = user::find_by_username(&state.pool, &username).await?;

    tokio::time::sleep(Duration::from_millis(state.config.login_delay_ms)).await;

    let Some(account) = found else {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "user_not_found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = verify_password(&req.password, &account.hash_pass)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    if !account.is_active {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "inactive");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(account.id, &account.username, account.is_staff)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = account.id,
        username = %account.username,
        is_staff = account.is_staff,
        "User logged in"
    );

    Ok(ApiResponse::success(LoginResponse {
        token,
        user: UserInfo {
            id: account.id,
            username: account.username,
            is_staff: account.is_staff,
        },
    }))
}

/// POST /logout/ - tokens are stateless; the client drops its copy
pub async fn logout(user: CurrentUser) -> ApiResponse<()> {
    tracing::info!(user_id = user.id, username = %user.username, "User logged out");
    ApiResponse::notice("Logged out.")
}
