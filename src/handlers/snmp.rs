use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use crate::collector::SnmpCollector;
use crate::commands::{catalog, resolve};
use crate::models::{QueryParams, SnmpApiError, SnmpResponse};
use crate::snmp::ConnectionParams;
use crate::state::AppState;

/// GET /api/snmp — унифицированный запрос.
///
/// Параметры: hostname (обязателен), cmd или oid (один из двух),
/// community, port, timeout (мс), retries, as_table.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Response {
    let Some(hostname) = params.hostname else {
        warn!("Запрос без hostname");
        return bad_request("hostname parameter is required");
    };

    // Прямой oid проверяем синтаксически до разрешения
    if params.cmd.is_none() {
        if let Some(oid) = &params.oid {
            if !crate::snmp::is_valid_oid(oid) {
                warn!(%hostname, oid = %oid, "Невалидный формат OID");
                return SnmpApiError::InvalidOid(oid.clone()).into_response();
            }
        }
    }

    // Нужен либо cmd, либо прямой oid
    let Some(input) = params.cmd.or(params.oid) else {
        warn!(%hostname, "Запрос без cmd и без oid");
        return bad_request("Either cmd or oid parameter is required");
    };

    let resolved = match resolve(catalog(), &input) {
        Ok(resolved) => resolved,
        Err(e) => return e.into_response(),
    };

    info!(
        %hostname,
        command = %resolved.command.name,
        oid = %resolved.oid,
        operation = resolved.operation.as_str(),
        "SNMP запрос принят"
    );

    let defaults = &state.config.settings.connection;
    let connection = ConnectionParams {
        host: hostname.clone(),
        community: params
            .community
            .unwrap_or_else(|| defaults.community.clone()),
        port: params.port.unwrap_or(defaults.port),
        timeout: Duration::from_millis(params.timeout.unwrap_or(defaults.timeout_ms)),
        retries: params.retries.unwrap_or(defaults.retries),
    };

    let collector = SnmpCollector::new(defaults.clone());
    let operation = resolved.operation.as_str();

    match collector
        .execute(&*state.executor, &resolved, &connection, params.as_table)
        .await
    {
        Ok(data) => Json(SnmpResponse::success(data, hostname, operation)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "status": "error",
            "error": message,
            "example": "/api/snmp?hostname=192.168.1.1&cmd=systemName",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}
