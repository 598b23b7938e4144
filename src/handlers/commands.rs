use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::commands::{catalog, CommandSummary, Vendor};

#[derive(Debug, Deserialize)]
pub struct CommandsParams {
    pub search: Option<String>,
    pub vendor: Option<Vendor>,
}

/// GET /api/snmp/commands — каталог команд.
/// ?search= — свободный поиск, ?vendor= — выборка по производителю
/// (generic-команды входят в любую). Листинг отдаётся без сырых OID.
pub async fn list_commands(Query(params): Query<CommandsParams>) -> Json<Value> {
    info!(search = ?params.search, vendor = ?params.vendor, "Запрошен список команд");

    if let Some(term) = params.search {
        let results: Vec<_> = catalog().search(&term).into_iter().collect();
        return Json(json!({
            "status": "success",
            "searchTerm": term,
            "resultCount": results.len(),
            "results": results,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
    }

    let commands = match params.vendor {
        Some(vendor) => catalog().by_vendor(vendor),
        None => catalog().list_all().iter().collect(),
    };

    let mut listing = serde_json::Map::new();
    for cmd in &commands {
        listing.insert(
            cmd.name.clone(),
            serde_json::to_value(CommandSummary::from(*cmd)).unwrap_or(Value::Null),
        );
    }

    Json(json!({
        "status": "success",
        "count": listing.len(),
        "commands": listing,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
