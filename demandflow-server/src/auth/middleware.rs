//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::CurrentUser;
use crate::db::repository::user;
use crate::{AppError, ErrorCode};
use crate::auth::extractor::authenticate_headers;
use crate::core::ServerState;
use crate::security_log;

/// Paths reachable without logging in
fn is_public_path(path: &str) -> bool {
    path == "/login/" || path == "/health" || path.starts_with("/debug/")
}

/// Login-required middleware
///
/// Validates `Authorization: Bearer <token>` and injects [`CurrentUser`] into
/// the request extensions. Public paths pass through untouched.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS || is_public_path(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let Some(claimed) = authenticate_headers(req.headers(), &state.jwt_service)? else {
        security_log!("WARN", "auth_missing", uri = req.uri().to_string());
        return Err(AppError::unauthorized());
    };

    let user = load_current_user(&state, claimed).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Refresh the token's identity from the users table
///
/// Staff and active flags come from the stored row, not from the claims
/// minted at login.
async fn load_current_user(
    state: &ServerState,
    claimed: CurrentUser,
) -> Result<CurrentUser, AppError> {
    let Some(stored) = user::find_by_id(&state.pool, claimed.id).await? else {
        security_log!("WARN", "auth_unknown_user", user_id = claimed.id, username = claimed.username);
        return Err(AppError::invalid_token("User no longer exists"));
    };

    if !stored.is_active {
        security_log!("WARN", "auth_inactive", user_id = stored.id, username = stored.username);
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    if stored.is_staff != claimed.is_staff {
        tracing::info!(
            user_id = stored.id,
            token_is_staff = claimed.is_staff,
            is_staff = stored.is_staff,
            "Staff flag changed since login"
        );
    }

    Ok(CurrentUser {
        id: stored.id,
        username: stored.username,
        is_staff: stored.is_staff,
    })
}

/// Staff-only actions and what a non-staff actor is told
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffGate {
    AddDemand,
    UpdateStatus,
    Settings,
    Export,
    ClearCompleted,
}

impl StaffGate {
    pub fn notice(&self) -> &'static str {
        match self {
            Self::AddDemand => "Only staff can add demands.",
            Self::UpdateStatus => "Only staff can update demand status.",
            Self::Settings => "Settings are for staff only.",
            Self::Export => "Only staff can export data.",
            Self::ClearCompleted => "Only staff can clear data.",
        }
    }

    /// Page the client goes back to after a denial
    pub fn redirect(&self) -> &'static str {
        match self {
            Self::AddDemand | Self::UpdateStatus | Self::Settings => "/",
            Self::Export | Self::ClearCompleted => "/completed/",
        }
    }

    pub fn check(&self, user: &CurrentUser) -> Result<(), AppError> {
        if user.is_staff {
            return Ok(());
        }
        security_log!(
            "WARN",
            "staff_required",
            user_id = user.id,
            username = user.username.clone(),
            gate = format!("{self:?}")
        );
        Err(AppError::staff_required(self.notice(), self.redirect()))
    }
}

/// Staff-only middleware factory
///
/// ```ignore
/// Router::new().route(
///     "/add/",
///     post(handler::add).layer(middleware::from_fn(require_staff(StaffGate::AddDemand))),
/// );
/// ```
pub fn require_staff(
    gate: StaffGate,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(AppError::unauthorized)?;
            gate.check(user)?;
            Ok(next.run(req).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_staff: bool) -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "someone".into(),
            is_staff,
        }
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/login/"));
        assert!(is_public_path("/health"));
        assert!(is_public_path("/debug/whoami/"));
        assert!(!is_public_path("/"));
        assert!(!is_public_path("/logout/"));
        assert!(!is_public_path("/settings/"));
    }

    #[test]
    fn test_staff_passes_every_gate() {
        for gate in [
            StaffGate::AddDemand,
            StaffGate::UpdateStatus,
            StaffGate::Settings,
            StaffGate::Export,
            StaffGate::ClearCompleted,
        ] {
            assert!(gate.check(&user(true)).is_ok());
        }
    }

    #[test]
    fn test_non_staff_gets_notice_and_redirect() {
        let err = StaffGate::Export.check(&user(false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffRequired);
        assert_eq!(err.message, "Only staff can export data.");
        assert_eq!(err.detail("redirect").unwrap(), "/completed/");

        let err = StaffGate::AddDemand.check(&user(false)).unwrap_err();
        assert_eq!(err.detail("redirect").unwrap(), "/");
    }
}
