//! [`MemoryStore`], a `ResultsStore` over plain vectors.
//!
//! Useful for tests and for serving a fixed JSON snapshot.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  record::{BanzukeEntry, Basho, Bout, Rikishi},
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryStore {
  pub rikishi: Vec<Rikishi>,
  pub basho:   Vec<Basho>,
  pub banzuke: Vec<BanzukeEntry>,
  pub bouts:   Vec<Bout>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Load a snapshot of the form
  /// `{"rikishi":[...],"basho":[...],"banzuke":[...],"bouts":[...]}`.
  ///
  /// Unknown divisions or sides fail deserialisation; rows that break the
  /// banzuke or bout invariants fail with [`Error::Invariant`].
  ///
  /// [`Error::Invariant`]: crate::Error::Invariant
  pub fn from_json(json: &str) -> Result<Self> {
    let store: Self = serde_json::from_str(json)?;
    store.validate()?;
    Ok(store)
  }

  /// Check every banzuke entry and bout. The builders below do not call
  /// this; the engine re-checks rows as it reads them.
  pub fn validate(&self) -> Result<()> {
    self.banzuke.iter().try_for_each(BanzukeEntry::validate)?;
    self.bouts.iter().try_for_each(Bout::validate)
  }

  pub fn with_rikishi(mut self, rikishi: Rikishi) -> Self {
    self.rikishi.push(rikishi);
    self
  }

  pub fn with_basho(mut self, basho_id: &str) -> Self {
    self.basho.push(Basho { basho_id: basho_id.to_owned() });
    self
  }

  pub fn with_entry(mut self, entry: BanzukeEntry) -> Self {
    self.banzuke.push(entry);
    self
  }

  pub fn with_bout(mut self, bout: Bout) -> Self {
    self.bouts.push(bout);
    self
  }
}

impl ResultsStore for MemoryStore {
  type Error = Infallible;

  async fn fetch_rikishi(&self, rikishi_id: &str) -> Result<Option<Rikishi>, Infallible> {
    Ok(self.rikishi.iter().find(|r| r.rikishi_id == rikishi_id).cloned())
  }

  async fn fetch_rikishi_batch(
    &self,
    rikishi_ids: &[String],
  ) -> Result<Vec<Rikishi>, Infallible> {
    Ok(
      self
        .rikishi
        .iter()
        .filter(|r| rikishi_ids.contains(&r.rikishi_id))
        .cloned()
        .collect(),
    )
  }

  async fn fetch_basho(&self, basho_id: &str) -> Result<Option<Basho>, Infallible> {
    Ok(self.basho.iter().find(|b| b.basho_id == basho_id).cloned())
  }

  async fn fetch_latest_basho(&self) -> Result<Option<Basho>, Infallible> {
    let latest = self
      .basho
      .iter()
      .map(|b| &b.basho_id)
      .chain(self.banzuke.iter().map(|e| &e.basho_id))
      .chain(self.bouts.iter().map(|b| &b.basho_id))
      .max();
    Ok(latest.map(|id| Basho { basho_id: id.clone() }))
  }

  async fn fetch_banzuke(
    &self,
    filter: &BanzukeFilter,
  ) -> Result<Vec<BanzukeEntry>, Infallible> {
    Ok(self.banzuke.iter().filter(|e| filter.matches(e)).cloned().collect())
  }

  async fn fetch_bouts(&self, filter: &BoutFilter) -> Result<Vec<Bout>, Infallible> {
    Ok(self.bouts.iter().filter(|b| filter.matches(b)).cloned().collect())
  }
}
