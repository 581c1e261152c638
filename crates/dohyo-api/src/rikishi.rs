//! Handlers for `/rikishi` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/rikishi/{id}` | Career summary; 404 if unknown or never ranked |
//! | `GET`  | `/rikishi/{id}/timeline` | Per-basho records, oldest first |
//! | `GET`  | `/rikishi/{id}/rank-progression` | Timeline plus kachi/make-koshi and yusho flags |
//! | `GET`  | `/rikishi/{id}/kimarite` | Winning and losing technique breakdown |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
};
use dohyo_core::{
  engine,
  read::{CareerSummary, KimariteStats, RankProgressionItem, TimelineItem},
  store::ResultsStore,
};

use crate::{
  error::ApiError,
  params::{self, PathParams},
};

/// `GET /rikishi/{id}`
pub async fn summary<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams(id): PathParams<String>,
) -> Result<Json<CareerSummary>, ApiError> {
  let id = params::rikishi_id("id", &id)?;
  Ok(Json(engine::rikishi_summary(store.as_ref(), &id).await?))
}

/// `GET /rikishi/{id}/timeline`
pub async fn timeline<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams(id): PathParams<String>,
) -> Result<Json<Vec<TimelineItem>>, ApiError> {
  let id = params::rikishi_id("id", &id)?;
  Ok(Json(engine::timeline(store.as_ref(), &id).await?))
}

/// `GET /rikishi/{id}/rank-progression`
pub async fn rank_progression<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams(id): PathParams<String>,
) -> Result<Json<Vec<RankProgressionItem>>, ApiError> {
  let id = params::rikishi_id("id", &id)?;
  Ok(Json(engine::rank_progression(store.as_ref(), &id).await?))
}

/// `GET /rikishi/{id}/kimarite`
pub async fn kimarite<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams(id): PathParams<String>,
) -> Result<Json<KimariteStats>, ApiError> {
  let id = params::rikishi_id("id", &id)?;
  Ok(Json(engine::kimarite_stats(store.as_ref(), &id).await?))
}
