use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::ValidateOidRequest;
use crate::snmp::{is_table_oid, is_valid_oid};

/// POST /api/snmp/validate-oid — синтаксическая проверка OID
/// и эвристика "табличный по форме".
pub async fn validate_oid(Json(req): Json<ValidateOidRequest>) -> (StatusCode, Json<Value>) {
    let Some(oid) = req.oid else {
        warn!("Запрос валидации без oid");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "error": "oid is required",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        );
    };

    let is_valid = is_valid_oid(&oid);
    let is_table = is_table_oid(&oid);

    info!(%oid, is_valid, is_table, "Валидация OID");

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "oid": oid,
            "isValid": is_valid,
            "isTable": is_table,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
