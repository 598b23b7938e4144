use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod oid;
pub mod v2c;
pub mod value;

pub use oid::{is_table_oid, is_valid_oid, parse_oid};
pub use v2c::Snmp2Executor;

/// Одна (OID, тип, значение) тройка из SNMP ответа.
/// `value_type` — ASN.1 тег значения (2 = Integer, 4 = OctetString, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Varbind {
    pub oid: String,
    #[serde(rename = "type")]
    pub value_type: u8,
    pub value: serde_json::Value,
}

/// Параметры подключения к агенту для одной операции.
/// Собираются в хендлере: параметры запроса поверх дефолтов из конфига.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub host: String,
    pub community: String,
    pub port: u16,
    pub timeout: Duration,
    pub retries: u32,
}

impl ConnectionParams {
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Исполнитель SNMP операций против удалённого агента.
/// На каждую операцию открывается отдельная сессия, закрывается на любом
/// исходе. Walk и bulk-walk возвращают varbinds в порядке ответа агента.
#[async_trait]
pub trait SnmpExecutor: Send + Sync {
    /// SNMP GET по списку OID
    async fn get(&self, params: &ConnectionParams, oids: &[String]) -> Result<Vec<Varbind>>;

    /// Обход поддерева, `max_per_step` элементов за один шаг
    async fn walk(
        &self,
        params: &ConnectionParams,
        root_oid: &str,
        max_per_step: u32,
    ) -> Result<Vec<Varbind>>;

    /// GETBULK обход поддерева
    async fn bulk_walk(
        &self,
        params: &ConnectionParams,
        root_oid: &str,
        max_repetitions: u32,
        non_repeaters: u32,
    ) -> Result<Vec<Varbind>>;

    /// Умеет ли исполнитель GETBULK. Если нет — коллектор прозрачно
    /// откатывается на обычный walk.
    fn supports_bulk(&self) -> bool;
}
