use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, list_commands, query, validate_oid};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/snmp", get(query))
        .route("/api/snmp/commands", get(list_commands))
        .route("/api/snmp/validate-oid", post(validate_oid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
