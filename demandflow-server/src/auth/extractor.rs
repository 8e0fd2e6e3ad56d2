//! CurrentUser extractor
//!
//! Handlers behind [`require_auth`](super::require_auth) take `CurrentUser`
//! directly; the middleware has already validated the token.

use axum::{extract::FromRequestParts, http::request::Parts};
use http::HeaderMap;

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = authenticate_headers(&parts.headers, &state.jwt_service)?
            .ok_or_else(AppError::unauthorized)?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

/// Resolve the bearer token in `headers`, if any
///
/// `Ok(None)` means no `Authorization` header was sent at all.
pub fn authenticate_headers(
    headers: &HeaderMap,
    jwt_service: &JwtService,
) -> Result<Option<CurrentUser>, AppError> {
    let Some(header) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(None);
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    let claims = jwt_service.validate_token(token).map_err(|e| {
        security_log!("WARN", "auth_failed", error = e.to_string());
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    CurrentUser::try_from(claims)
        .map(Some)
        .map_err(|e| AppError::invalid_token(format!("Malformed token claims: {e}")))
}
