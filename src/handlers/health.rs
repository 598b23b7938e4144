use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "snmp-api",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
