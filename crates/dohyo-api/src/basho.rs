//! Handlers for basho-scoped endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/basho/{id}` | Bout counts for all six divisions |
//! | `GET`  | `/basho/{id}/{division}` | Standings table |
//! | `GET`  | `/bouts/{basho_id}/{division}` | Bout card in day order |
//!
//! The division-scoped routes return 404 `BASHO_NOT_FOUND` for a basho with
//! no existence record, even when bouts for it are present.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
};
use dohyo_core::{
  engine,
  read::{BashoSummary, StandingRow},
  record::Bout,
  store::ResultsStore,
};

use crate::{
  error::ApiError,
  params::{self, PathParams},
};

/// `GET /basho/{id}`
pub async fn summary<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams(id): PathParams<String>,
) -> Result<Json<BashoSummary>, ApiError> {
  let id = params::basho_id("id", &id)?;
  Ok(Json(engine::basho_summary(store.as_ref(), &id).await?))
}

/// `GET /basho/{id}/{division}`
pub async fn standings<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams((id, division)): PathParams<(String, String)>,
) -> Result<Json<Vec<StandingRow>>, ApiError> {
  let id = params::basho_id("id", &id)?;
  let division = params::division(&division)?;

  engine::basho_summary(store.as_ref(), &id).await?;
  Ok(Json(engine::standings(store.as_ref(), &id, division).await?))
}

/// `GET /bouts/{basho_id}/{division}`
pub async fn bouts<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams((basho_id, division)): PathParams<(String, String)>,
) -> Result<Json<Vec<Bout>>, ApiError> {
  let basho_id = params::basho_id("bashoId", &basho_id)?;
  let division = params::division(&division)?;

  engine::basho_summary(store.as_ref(), &basho_id).await?;
  Ok(Json(engine::bouts(store.as_ref(), &basho_id, division).await?))
}
