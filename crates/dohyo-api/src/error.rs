//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure renders as `{"error":{"code","message","details"?}}`.

use std::collections::BTreeMap;

use axum::{
  Json,
  extract::rejection::PathRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Per-field validation messages, keyed by path parameter name.
pub type Details = BTreeMap<&'static str, String>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("rikishi not found")]
  RikishiNotFound,

  #[error("basho not found")]
  BashoNotFound,

  /// No route matches the request path.
  #[error("not found")]
  NotFound,

  #[error("{message}")]
  InvalidParameter { message: &'static str, details: Details },

  #[error("internal error: {0}")]
  Internal(#[source] dohyo_core::Error),
}

impl ApiError {
  /// A 400 for a single offending field.
  pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
    Self::InvalidParameter {
      message: "Invalid parameter",
      details: BTreeMap::from([(field, reason.into())]),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::RikishiNotFound | ApiError::BashoNotFound | ApiError::NotFound => {
        StatusCode::NOT_FOUND
      }
      ApiError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  pub fn code(&self) -> &'static str {
    match self {
      ApiError::RikishiNotFound => "RIKISHI_NOT_FOUND",
      ApiError::BashoNotFound => "BASHO_NOT_FOUND",
      ApiError::NotFound => "NOT_FOUND",
      ApiError::InvalidParameter { .. } => "INVALID_PARAMETER",
      ApiError::Internal(_) => "INTERNAL",
    }
  }
}

impl From<dohyo_core::Error> for ApiError {
  fn from(e: dohyo_core::Error) -> Self {
    use dohyo_core::Error as E;
    match e {
      E::RikishiNotFound(_) | E::NoBanzukeEntries(_) => ApiError::RikishiNotFound,
      E::BashoNotFound(_) => ApiError::BashoNotFound,
      E::InvalidInput(field) => ApiError::invalid(field, format!("{field} must be non-empty")),
      other => ApiError::Internal(other),
    }
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self { ApiError::invalid("path", rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let code = self.code();

    let body = match self {
      ApiError::RikishiNotFound => json!({ "error": { "code": code, "message": "Rikishi not found" } }),
      ApiError::BashoNotFound => json!({ "error": { "code": code, "message": "Basho not found" } }),
      ApiError::NotFound => json!({ "error": { "code": code, "message": "Not found" } }),
      ApiError::InvalidParameter { message, details } => {
        json!({ "error": { "code": code, "message": message, "details": details } })
      }
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        json!({ "error": { "code": code, "message": "Internal server error" } })
      }
    };

    (status, Json(body)).into_response()
  }
}
