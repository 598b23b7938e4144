use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use snmp_api::config::AppConfig;
use snmp_api::routes::create_router;
use snmp_api::snmp::{ConnectionParams, SnmpExecutor, Varbind};
use snmp_api::state::AppState;

/// Мок исполнителя: отдаёт заготовленные varbind'ы, в сеть не ходит
struct FakeExecutor {
    varbinds: Vec<Varbind>,
}

impl FakeExecutor {
    fn empty() -> Self {
        Self { varbinds: vec![] }
    }

    fn with(varbinds: Vec<Varbind>) -> Self {
        Self { varbinds }
    }
}

#[async_trait]
impl SnmpExecutor for FakeExecutor {
    async fn get(&self, _params: &ConnectionParams, _oids: &[String]) -> Result<Vec<Varbind>> {
        if self.varbinds.is_empty() {
            anyhow::bail!("SNMP ответ пустой");
        }
        Ok(self.varbinds.clone())
    }

    async fn walk(
        &self,
        _params: &ConnectionParams,
        _root_oid: &str,
        _max_per_step: u32,
    ) -> Result<Vec<Varbind>> {
        Ok(self.varbinds.clone())
    }

    async fn bulk_walk(
        &self,
        _params: &ConnectionParams,
        _root_oid: &str,
        _max_repetitions: u32,
        _non_repeaters: u32,
    ) -> Result<Vec<Varbind>> {
        Ok(self.varbinds.clone())
    }

    fn supports_bulk(&self) -> bool {
        true
    }
}

fn vb(oid: &str, value: Value) -> Varbind {
    Varbind {
        oid: oid.to_string(),
        value_type: 4,
        value,
    }
}

fn app(executor: FakeExecutor) -> Router {
    create_router(AppState::new(AppConfig::load(), Arc::new(executor)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_public_and_static() {
    let (status, body) = get_json(app(FakeExecutor::empty()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "snmp-api");
}

#[tokio::test]
async fn commands_listing_omits_raw_oids() {
    let (status, body) = get_json(app(FakeExecutor::empty()), "/api/snmp/commands").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert!(body["count"].as_u64().unwrap() > 20);

    let system_name = &body["commands"]["systemName"];
    assert_eq!(system_name["operation"], "get");
    assert!(system_name.get("oid").is_none());
    assert!(system_name["aliases"]
        .as_array()
        .unwrap()
        .contains(&json!("hostname")));
}

#[tokio::test]
async fn commands_search_filters() {
    let (status, body) =
        get_json(app(FakeExecutor::empty()), "/api/snmp/commands?search=vlan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searchTerm"], "vlan");
    assert!(body["resultCount"].as_u64().unwrap() >= 1);
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"ciscoVLAN"));
}

#[tokio::test]
async fn commands_vendor_filter_includes_generic() {
    let (_, body) = get_json(app(FakeExecutor::empty()), "/api/snmp/commands?vendor=cisco").await;

    let commands = body["commands"].as_object().unwrap();
    assert!(commands.contains_key("ciscoVLAN"));
    assert!(commands.contains_key("systemName"));
    assert!(!commands.contains_key("juniperCPU"));
}

#[tokio::test]
async fn validate_oid_reports_shape() {
    let (status, body) = post_json(
        app(FakeExecutor::empty()),
        "/api/snmp/validate-oid",
        json!({"oid": "1.3.6.1.2.1.2.2.1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], true);
    assert_eq!(body["isTable"], true);

    let (_, body) = post_json(
        app(FakeExecutor::empty()),
        "/api/snmp/validate-oid",
        json!({"oid": "1.3.6.1.2.1.1.5.0"}),
    )
    .await;
    assert_eq!(body["isValid"], true);
    assert_eq!(body["isTable"], false);

    let (_, body) = post_json(
        app(FakeExecutor::empty()),
        "/api/snmp/validate-oid",
        json!({"oid": "1..2"}),
    )
    .await;
    assert_eq!(body["isValid"], false);
}

#[tokio::test]
async fn validate_oid_requires_oid() {
    let (status, body) =
        post_json(app(FakeExecutor::empty()), "/api/snmp/validate-oid", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn query_requires_hostname() {
    let (status, body) = get_json(app(FakeExecutor::empty()), "/api/snmp?cmd=systemName").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "hostname parameter is required");
}

#[tokio::test]
async fn query_requires_cmd_or_oid() {
    let (status, body) = get_json(app(FakeExecutor::empty()), "/api/snmp?hostname=10.0.0.1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Either cmd or oid parameter is required");
}

#[tokio::test]
async fn query_rejects_malformed_direct_oid() {
    let (status, body) = get_json(
        app(FakeExecutor::empty()),
        "/api/snmp?hostname=10.0.0.1&oid=1..2.3",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid OID"));
}

#[tokio::test]
async fn query_unknown_command_is_client_error() {
    let (status, body) = get_json(
        app(FakeExecutor::empty()),
        "/api/snmp?hostname=10.0.0.1&cmd=bogusCmd",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogusCmd"));
}

#[tokio::test]
async fn query_get_returns_varbinds() {
    let executor = FakeExecutor::with(vec![vb("1.3.6.1.2.1.1.5.0", json!("sw-core-01"))]);
    let (status, body) = get_json(
        app(executor),
        "/api/snmp?hostname=10.0.0.1&cmd=systemName",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["operation"], "GET");
    assert_eq!(body["hostname"], "10.0.0.1");
    assert_eq!(body["data"][0]["value"], "sw-core-01");
}

#[tokio::test]
async fn query_direct_oid_is_get() {
    let executor = FakeExecutor::with(vec![vb("1.3.6.1.2.1.1.1.0", json!("Linux sw1"))]);
    let (status, body) = get_json(
        app(executor),
        "/api/snmp?hostname=10.0.0.1&oid=1.3.6.1.2.1.1.1.0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "GET");
    assert_eq!(body["data"][0]["oid"], "1.3.6.1.2.1.1.1.0");
}

#[tokio::test]
async fn query_table_walk_builds_rows() {
    let executor = FakeExecutor::with(vec![
        vb("1.3.6.1.2.1.2.2.1.2.1", json!("eth0")),
        vb("1.3.6.1.2.1.2.2.1.2.2", json!("eth1")),
        vb("1.3.6.1.2.1.2.2.1.7.1", json!(1)),
    ]);
    let (status, body) = get_json(
        app(executor),
        "/api/snmp?hostname=10.0.0.1&cmd=interfacesTable",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "WALK");
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["index"], "1");
    assert_eq!(rows[0]["ifDescr"], "eth0");
    assert_eq!(rows[0]["ifAdminStatus"], 1);
    assert_eq!(rows[1]["ifDescr"], "eth1");
}

#[tokio::test]
async fn query_as_table_forces_rows_for_flat_walk() {
    let executor = FakeExecutor::with(vec![vb("1.3.6.1.2.1.2.2.1.2.1", json!("eth0"))]);
    let (_, body) = get_json(
        app(executor),
        "/api/snmp?hostname=10.0.0.1&cmd=interfaces&as_table=true",
    )
    .await;

    let rows = body["data"].as_array().unwrap();
    // base 1.3.6.1.2.1.2.2: колонка "1" (entry), индекс "2" — без
    // известного маппинга имя синтетическое
    assert_eq!(rows[0]["col_1"], "eth0");
}

#[tokio::test]
async fn query_get_without_data_is_execution_failure() {
    let (status, body) = get_json(
        app(FakeExecutor::empty()),
        "/api/snmp?hostname=10.0.0.1&cmd=systemName",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
}
