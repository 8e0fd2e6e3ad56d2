//! Authentication Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// - /login/: public
/// - /logout/: behind the global `require_auth`
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login/", post(handler::login))
        .route("/logout/", post(handler::logout))
}
