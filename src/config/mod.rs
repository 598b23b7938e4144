use std::env;

pub mod settings;

pub use settings::{ConnectionSettings, ServerSettings, Settings};

/// Главная конфигурация приложения. Окружение читается один раз при
/// старте; дальше конфиг передаётся явно и не мутируется. Параметры
/// конкретного запроса перекрывают дефолты подключения.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: Settings,
}

impl AppConfig {
    /// Собирает конфигурацию: дефолты + переменные окружения
    pub fn load() -> Self {
        let mut settings = Settings::default();

        if let Some(port) = env_parse("PORT") {
            settings.server.port = port;
        }
        if let Some(timeout) = env_parse("SNMP_TIMEOUT") {
            settings.connection.timeout_ms = timeout;
        }
        if let Some(retries) = env_parse("SNMP_RETRIES") {
            settings.connection.retries = retries;
        }
        if let Some(port) = env_parse("SNMP_PORT") {
            settings.connection.port = port;
        }
        if let Ok(community) = env::var("SNMP_COMMUNITY") {
            settings.connection.community = community;
        }
        if let Some(max_rep) = env_parse("SNMP_MAX_REPETITIONS") {
            settings.connection.max_repetitions = max_rep;
        }

        Self { settings }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
