//! Settings API (staff only)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{StaffGate, require_staff};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/settings/",
        get(handler::show)
            .post(handler::apply)
            .layer(middleware::from_fn(require_staff(StaffGate::Settings))),
    )
}
