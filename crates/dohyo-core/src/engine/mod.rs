//! The aggregation engine: nine read-only queries over a [`ResultsStore`].
//!
//! Every query is a pure function of its arguments and the store snapshot.
//! Independent fetches within one query are issued concurrently; the first
//! failure aborts the whole query and nothing is returned partially.

mod basho;
mod career;
mod matchup;

use std::{collections::BTreeMap, future::Future};

pub use basho::{basho_summary, bouts, standings};
pub use career::{kimarite_stats, rank_progression, rikishi_summary, timeline};
pub use matchup::{comparison, head_to_head};

use crate::{
  Error, Result,
  order::kimarite_key,
  record::{BanzukeEntry, Bout},
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

/// Lift a store future's error into [`Error::Store`] so it can be joined
/// with other fetches.
async fn lift<T, E>(fut: impl Future<Output = Result<T, E>>) -> Result<T>
where
  E: std::error::Error + Send + Sync + 'static,
{
  fut.await.map_err(Error::store)
}

/// Fetch bouts, failing the query on any row that breaks the bout invariants.
async fn checked_bouts<S: ResultsStore>(store: &S, filter: &BoutFilter) -> Result<Vec<Bout>> {
  let bouts = lift(store.fetch_bouts(filter)).await?;
  bouts.iter().try_for_each(Bout::validate)?;
  Ok(bouts)
}

async fn checked_banzuke<S: ResultsStore>(
  store: &S,
  filter: &BanzukeFilter,
) -> Result<Vec<BanzukeEntry>> {
  let entries = lift(store.fetch_banzuke(filter)).await?;
  entries.iter().try_for_each(BanzukeEntry::validate)?;
  Ok(entries)
}

/// Narrow a row count to the `u32` the read models carry.
fn count(n: usize) -> Result<u32> {
  u32::try_from(n).map_err(|_| Error::Invariant(format!("count {n} exceeds u32")))
}

/// Trim an identifier argument, rejecting blanks.
fn require(field: &'static str, value: &str) -> Result<String> {
  let v = value.trim();
  if v.is_empty() {
    return Err(Error::InvalidInput(field));
  }
  Ok(v.to_owned())
}

/// Frequency table keyed by kimarite id.
#[derive(Debug, Default)]
struct KimariteTally(BTreeMap<String, u32>);

impl KimariteTally {
  fn record(&mut self, kimarite_id: &str) {
    *self.0.entry(kimarite_id.to_owned()).or_default() += 1;
  }

  /// Entries sorted by count descending, then id ascending.
  fn ranked(self) -> Vec<(String, u32)> {
    let mut rows: Vec<(String, u32)> = self.0.into_iter().collect();
    rows.sort_by(|(a_id, a_n), (b_id, b_n)| {
      kimarite_key(a_id, *a_n).cmp(&kimarite_key(b_id, *b_n))
    });
    rows
  }
}

/// `part / whole`, or 0 when `whole` is 0.
fn ratio(part: u32, whole: u32) -> f64 {
  if whole == 0 { 0.0 } else { f64::from(part) / f64::from(whole) }
}
