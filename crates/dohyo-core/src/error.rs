//! Error types for `dohyo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("rikishi not found: {0}")]
  RikishiNotFound(String),

  #[error("no banzuke entries for rikishi: {0}")]
  NoBanzukeEntries(String),

  #[error("basho not found: {0}")]
  BashoNotFound(String),

  #[error("{0} is required")]
  InvalidInput(&'static str),

  #[error("unknown division value: {0:?}")]
  UnknownDivision(String),

  #[error("unknown side value: {0:?}")]
  UnknownSide(String),

  /// The fact tables disagree with each other (e.g. a banzuke entry naming
  /// a rikishi that does not exist).
  #[error("inconsistent data: {0}")]
  Invariant(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  /// `true` for the conditions a caller should report as "does not exist".
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Self::RikishiNotFound(_) | Self::NoBanzukeEntries(_) | Self::BashoNotFound(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
