use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибки API. Клиентские (невалидный OID, неизвестная команда)
/// возвращаются сразу, без похода к агенту.
#[derive(Debug, Error)]
pub enum SnmpApiError {
    #[error("Invalid OID format: {0}")]
    InvalidOid(String),

    #[error("Unknown SNMP command: '{0}'. Run GET /api/snmp/commands for available commands.")]
    UnknownCommand(String),

    #[error("SNMP {operation} failed for {oid}: {source}")]
    ExecutionFailed {
        oid: String,
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Конфигурация каталога команд неоднозначна: {0}")]
    Configuration(String),
}

impl SnmpApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SnmpApiError::InvalidOid(_) | SnmpApiError::UnknownCommand(_) => {
                StatusCode::BAD_REQUEST
            }
            SnmpApiError::ExecutionFailed { .. } | SnmpApiError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SnmpApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "status": "error",
            "error": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}
