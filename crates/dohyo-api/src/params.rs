//! Path parameter validation.
//!
//! Values are trimmed before checking. Each validator names the parameter it
//! rejects so the 400 body can point at it.

use axum::extract::FromRequestParts;
use dohyo_core::Division;
use strum::IntoEnumIterator as _;

use crate::error::ApiError;

/// [`axum::extract::Path`] with its rejection rendered as an
/// `INVALID_PARAMETER` body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParams<T>(pub T);

/// A non-blank rikishi id.
pub fn rikishi_id(field: &'static str, raw: &str) -> Result<String, ApiError> {
  let v = raw.trim();
  if v.is_empty() {
    return Err(ApiError::invalid(field, "rikishiId must be non-empty"));
  }
  Ok(v.to_owned())
}

/// A basho id of exactly six ASCII digits (`YYYYMM`).
pub fn basho_id(field: &'static str, raw: &str) -> Result<String, ApiError> {
  let v = raw.trim();
  if v.len() != 6 || !v.bytes().all(|b| b.is_ascii_digit()) {
    return Err(ApiError::invalid(field, "bashoId must be six digits (YYYYMM)"));
  }
  Ok(v.to_owned())
}

/// A division name, case-insensitive.
pub fn division(raw: &str) -> Result<Division, ApiError> {
  Division::parse(raw).map_err(|_| {
    let names: Vec<&str> = Division::iter().map(Division::as_str).collect();
    ApiError::InvalidParameter {
      message: "Invalid division",
      details: [("division", format!("division must be one of: {}", names.join(", ")))].into(),
    }
  })
}
