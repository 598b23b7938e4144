use serde::{Deserialize, Serialize};

use crate::snmp::Varbind;
use crate::table::TableRow;

pub mod error;

pub use error::SnmpApiError;

/// Параметры унифицированного запроса GET /api/snmp
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub hostname: Option<String>,
    /// Имя команды или алиас
    pub cmd: Option<String>,
    /// Прямой OID, если cmd не задан
    pub oid: Option<String>,
    pub community: Option<String>,
    pub port: Option<u16>,
    /// Таймаут одной операции, миллисекунды
    pub timeout: Option<u64>,
    pub retries: Option<u32>,
    /// Принудительно собрать walk-результат в таблицу
    #[serde(default)]
    pub as_table: bool,
}

/// Данные ответа: плоский список varbind'ов или собранная таблица
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryData {
    Varbinds(Vec<Varbind>),
    Table(Vec<TableRow>),
}

/// Ответ на SNMP запрос
#[derive(Debug, Serialize)]
pub struct SnmpResponse {
    pub status: &'static str,
    pub data: QueryData,
    pub hostname: String,
    pub operation: &'static str,
    pub timestamp: String,
}

impl SnmpResponse {
    pub fn success(data: QueryData, hostname: String, operation: &'static str) -> Self {
        Self {
            status: "success",
            data,
            hostname,
            operation,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Тело POST /api/snmp/validate-oid
#[derive(Debug, Deserialize)]
pub struct ValidateOidRequest {
    pub oid: Option<String>,
}
