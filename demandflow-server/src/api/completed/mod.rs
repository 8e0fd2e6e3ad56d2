//! Completed demands: list, export, clear

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{StaffGate, require_staff};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/completed/", get(handler::list))
        .route(
            "/completed/export/",
            get(handler::export).layer(middleware::from_fn(require_staff(StaffGate::Export))),
        )
        .route(
            "/completed/clear/",
            get(handler::confirm_clear)
                .post(handler::clear)
                .layer(middleware::from_fn(require_staff(StaffGate::ClearCompleted))),
        )
}
