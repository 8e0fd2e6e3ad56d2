//! Demand API: dashboard, intake and status transitions

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{StaffGate, require_staff};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::dashboard))
        .route(
            "/add/",
            post(handler::add).layer(middleware::from_fn(require_staff(StaffGate::AddDemand))),
        )
        .merge(transition_routes())
}

fn transition_routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}/in-progress/", post(handler::mark_in_progress))
        .route("/{id}/complete/", post(handler::mark_completed))
        .route_layer(middleware::from_fn(require_staff(StaffGate::UpdateStatus)))
}
