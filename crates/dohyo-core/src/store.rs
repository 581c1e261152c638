//! The `ResultsStore` trait and supporting filter types.
//!
//! The trait is implemented by storage backends (e.g. `dohyo-store-sqlite`)
//! and by [`MemoryStore`](crate::memory::MemoryStore). The engine depends on
//! this abstraction only; a store handle is the consistent snapshot every
//! query reads from.

use std::future::Future;

use crate::{
  division::Division,
  record::{BanzukeEntry, Basho, Bout, Rikishi},
};

// ─── Filters ─────────────────────────────────────────────────────────────────

/// Parameters for [`ResultsStore::fetch_banzuke`]. Set fields are ANDed; an
/// empty filter matches every entry.
#[derive(Debug, Clone, Default)]
pub struct BanzukeFilter {
  pub rikishi_id: Option<String>,
  pub basho_id:   Option<String>,
  pub division:   Option<Division>,
}

impl BanzukeFilter {
  pub fn rikishi(rikishi_id: &str) -> Self {
    Self { rikishi_id: Some(rikishi_id.to_owned()), ..Self::default() }
  }

  pub fn basho_division(basho_id: &str, division: Division) -> Self {
    Self {
      basho_id: Some(basho_id.to_owned()),
      division: Some(division),
      ..Self::default()
    }
  }

  pub fn matches(&self, e: &BanzukeEntry) -> bool {
    self.rikishi_id.as_ref().is_none_or(|id| *id == e.rikishi_id)
      && self.basho_id.as_ref().is_none_or(|id| *id == e.basho_id)
      && self.division.is_none_or(|d| d == e.division)
  }
}

/// Parameters for [`ResultsStore::fetch_bouts`]. Set fields are ANDed; an
/// empty filter matches every bout.
#[derive(Debug, Clone, Default)]
pub struct BoutFilter {
  /// The rikishi appears on either side.
  pub rikishi_id: Option<String>,
  /// Both rikishi appear, in either east/west assignment.
  pub pair:       Option<(String, String)>,
  pub basho_id:   Option<String>,
  pub division:   Option<Division>,
}

impl BoutFilter {
  pub fn rikishi(rikishi_id: &str) -> Self {
    Self { rikishi_id: Some(rikishi_id.to_owned()), ..Self::default() }
  }

  pub fn pair(a: &str, b: &str) -> Self {
    Self { pair: Some((a.to_owned(), b.to_owned())), ..Self::default() }
  }

  pub fn basho(basho_id: &str) -> Self {
    Self { basho_id: Some(basho_id.to_owned()), ..Self::default() }
  }

  pub fn basho_division(basho_id: &str, division: Division) -> Self {
    Self {
      basho_id: Some(basho_id.to_owned()),
      division: Some(division),
      ..Self::default()
    }
  }

  pub fn matches(&self, b: &Bout) -> bool {
    let pair_ok = self.pair.as_ref().is_none_or(|(x, y)| {
      (b.east_rikishi_id == *x && b.west_rikishi_id == *y)
        || (b.east_rikishi_id == *y && b.west_rikishi_id == *x)
    });

    self.rikishi_id.as_ref().is_none_or(|id| b.involves(id))
      && pair_ok
      && self.basho_id.as_ref().is_none_or(|id| *id == b.basho_id)
      && self.division.is_none_or(|d| d == b.division)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read-only access to the rikishi, basho, banzuke and bout tables.
///
/// Rows come back in no particular order; callers sort. All methods return
/// `Send` futures so the trait can be used in multi-threaded async runtimes
/// (e.g. tokio with `axum`).
pub trait ResultsStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a rikishi by id. Returns `None` if not found.
  fn fetch_rikishi<'a>(
    &'a self,
    rikishi_id: &'a str,
  ) -> impl Future<Output = Result<Option<Rikishi>, Self::Error>> + Send + 'a;

  /// Retrieve every rikishi whose id is in `rikishi_ids`. Unknown ids are
  /// skipped.
  fn fetch_rikishi_batch<'a>(
    &'a self,
    rikishi_ids: &'a [String],
  ) -> impl Future<Output = Result<Vec<Rikishi>, Self::Error>> + Send + 'a;

  /// Retrieve a basho's existence record. Returns `None` if not found.
  fn fetch_basho<'a>(
    &'a self,
    basho_id: &'a str,
  ) -> impl Future<Output = Result<Option<Basho>, Self::Error>> + Send + 'a;

  /// The greatest basho id known anywhere in the dataset.
  fn fetch_latest_basho(
    &self,
  ) -> impl Future<Output = Result<Option<Basho>, Self::Error>> + Send + '_;

  fn fetch_banzuke<'a>(
    &'a self,
    filter: &'a BanzukeFilter,
  ) -> impl Future<Output = Result<Vec<BanzukeEntry>, Self::Error>> + Send + 'a;

  fn fetch_bouts<'a>(
    &'a self,
    filter: &'a BoutFilter,
  ) -> impl Future<Output = Result<Vec<Bout>, Self::Error>> + Send + 'a;
}
