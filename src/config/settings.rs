use serde::{Deserialize, Serialize};

/// Базовые настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP сервер
    pub server: ServerSettings,
    /// Дефолты SNMP подключения
    pub connection: ConnectionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Порт HTTP сервера
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Таймаут SNMP операции (миллисекунды)
    pub timeout_ms: u64,
    /// Количество повторов при ошибках
    pub retries: u32,
    /// Порт SNMP агента
    pub port: u16,
    /// Community string для SNMPv2c
    pub community: String,
    /// max-repetitions для GETBULK и лимит шага обычного walk'а
    pub max_repetitions: u32,
    /// non-repeaters для GETBULK
    pub non_repeaters: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings { port: 3000 },
            connection: ConnectionSettings {
                timeout_ms: 5000,
                retries: 1,
                port: 161,
                community: "public".to_string(),
                max_repetitions: 20,
                non_repeaters: 0,
            },
        }
    }
}
