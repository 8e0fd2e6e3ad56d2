//! Debug endpoints, reachable without login and only when `DEBUG` is on

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/debug/reset-viewer/", get(handler::reset_viewer))
        .route("/debug/whoami/", get(handler::whoami))
        .route("/debug/check-viewer/", get(handler::check_viewer))
}
