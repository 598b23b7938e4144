use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snmp_api::commands::catalog;
use snmp_api::config::AppConfig;
use snmp_api::routes::create_router;
use snmp_api::snmp::Snmp2Executor;
use snmp_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("snmp_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load();

    // Неоднозначный каталог — ошибка старта, а не запроса
    catalog()
        .validate()
        .context("Каталог команд не прошёл проверку")?;

    let port = config.settings.server.port;
    let state = AppState::new(config, Arc::new(Snmp2Executor));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Не удалось занять порт {}", port))?;

    info!(port, "SNMP API сервер запущен");

    axum::serve(listener, app)
        .await
        .context("HTTP сервер завершился с ошибкой")?;

    Ok(())
}
