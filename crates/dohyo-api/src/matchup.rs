//! Handlers for two-rikishi endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/head-to-head/{a}/{b}` | Zero matches is a valid answer |
//! | `GET`  | `/compare/{a}/{b}` | 404 unless both rikishi exist |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
};
use dohyo_core::{
  engine,
  read::{Comparison, HeadToHead},
  store::ResultsStore,
};

use crate::{
  error::ApiError,
  params::{self, PathParams},
};

fn pair(a: &str, b: &str) -> Result<(String, String), ApiError> {
  match (params::rikishi_id("a", a), params::rikishi_id("b", b)) {
    (Ok(a), Ok(b)) => Ok((a, b)),
    _ => Err(ApiError::InvalidParameter {
      message: "Invalid parameter",
      details: [
        ("a", "rikishiId must be non-empty".to_owned()),
        ("b", "rikishiId must be non-empty".to_owned()),
      ]
      .into(),
    }),
  }
}

/// `GET /head-to-head/{a}/{b}`
pub async fn head_to_head<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams((a, b)): PathParams<(String, String)>,
) -> Result<Json<HeadToHead>, ApiError> {
  let (a, b) = pair(&a, &b)?;
  Ok(Json(engine::head_to_head(store.as_ref(), &a, &b).await?))
}

/// `GET /compare/{a}/{b}`
pub async fn compare<S: ResultsStore>(
  State(store): State<Arc<S>>,
  PathParams((a, b)): PathParams<(String, String)>,
) -> Result<Json<Comparison>, ApiError> {
  let (a, b) = pair(&a, &b)?;
  Ok(Json(engine::comparison(store.as_ref(), &a, &b).await?))
}
