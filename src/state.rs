use std::sync::Arc;

use crate::config::AppConfig;
use crate::snmp::SnmpExecutor;

/// Состояние приложения: конфиг (только чтение после старта) и
/// исполнитель SNMP операций. Исполнитель за trait-объектом, чтобы в
/// тестах подставлять мок вместо сети.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub executor: Arc<dyn SnmpExecutor>,
}

impl AppState {
    pub fn new(config: AppConfig, executor: Arc<dyn SnmpExecutor>) -> Self {
        Self { config, executor }
    }
}
