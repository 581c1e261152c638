//! HTTP service wiring for Dohyo: configuration and the top-level router.

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, routing::get};
use dohyo_core::store::ResultsStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `DOHYO_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_database_path")]
  pub database_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3001 }

fn default_database_path() -> PathBuf { PathBuf::from("dohyo.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          default_host(),
      port:          default_port(),
      database_path: default_database_path(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

/// The full service: `/health` plus the read API under `/api/v1`, wrapped in
/// a per-request trace span.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: ResultsStore + 'static,
{
  Router::new()
    .route("/health", get(health))
    .nest("/api/v1", dohyo_api::api_router(store))
    .fallback(dohyo_api::not_found)
    .layer(TraceLayer::new_for_http())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use dohyo_core::{memory::MemoryStore, record::Rikishi};
  use tower::ServiceExt as _;

  use super::*;

  async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn health_is_ok() {
    let (status, body) = get_json(app(Arc::new(MemoryStore::new())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
  }

  #[tokio::test]
  async fn api_is_nested_under_v1() {
    let store = MemoryStore::new()
      .with_rikishi(Rikishi {
        rikishi_id: "r1".into(),
        shikona:    "Ura".into(),
        heya:       None,
      });

    let (status, body) = get_json(app(Arc::new(store)), "/api/v1/head-to-head/r1/r2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatches"], 0);

    let (status, body) =
      get_json(app(Arc::new(MemoryStore::new())), "/api/v1/rikishi/r1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RIKISHI_NOT_FOUND");
  }

  #[tokio::test]
  async fn unknown_paths_use_the_error_body() {
    for uri in ["/elsewhere", "/api/v1/nothing/here"] {
      let (status, body) = get_json(app(Arc::new(MemoryStore::new())), uri).await;
      assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
      assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
  }

  #[test]
  fn config_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "127.0.0.1:3001");
  }

  #[test]
  fn config_environment_overrides() {
    let env = HashMap::from([
      ("DOHYO_PORT".to_string(), "8080".to_string()),
      ("DOHYO_DATABASE_PATH".to_string(), "/tmp/sumo.db".to_string()),
    ]);
    let cfg: ServerConfig = config::Config::builder()
      .add_source(config::Environment::with_prefix("DOHYO").source(Some(env)))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/sumo.db"));
  }
}
