//! JSON read API for Dohyo.
//!
//! Exposes an axum [`Router`] backed by any [`dohyo_core::store::ResultsStore`].
//! Every route is a `GET` that validates its path parameters, runs one engine
//! query, and returns the read model as JSON. Transport concerns (tracing,
//! binding, shutdown) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/v1", dohyo_api::api_router(store.clone()))
//! ```

pub mod basho;
pub mod error;
pub mod matchup;
pub mod params;
pub mod rikishi;

use std::sync::Arc;

use axum::{Router, routing::get};
use dohyo_core::store::ResultsStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ResultsStore + 'static,
{
  Router::new()
    // Rikishi
    .route("/rikishi/{id}", get(rikishi::summary::<S>))
    .route("/rikishi/{id}/timeline", get(rikishi::timeline::<S>))
    .route("/rikishi/{id}/rank-progression", get(rikishi::rank_progression::<S>))
    .route("/rikishi/{id}/kimarite", get(rikishi::kimarite::<S>))
    // Basho
    .route("/basho/{id}", get(basho::summary::<S>))
    .route("/basho/{id}/{division}", get(basho::standings::<S>))
    .route("/bouts/{basho_id}/{division}", get(basho::bouts::<S>))
    // Matchups
    .route("/head-to-head/{a}/{b}", get(matchup::head_to_head::<S>))
    .route("/compare/{a}/{b}", get(matchup::compare::<S>))
    .fallback(not_found)
    .with_state(store)
}

/// Fallback for unmatched paths: a 404 in the usual error body.
pub async fn not_found() -> ApiError { ApiError::NotFound }
