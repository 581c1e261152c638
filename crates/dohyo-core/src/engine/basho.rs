//! Per-basho queries: bout counts, the bout card and division standings.

use std::collections::HashMap;

use super::{KimariteTally, checked_banzuke, checked_bouts, lift, ratio, require};
use crate::{
  Error, Result,
  division::Division,
  order::{card_order, standings_key},
  read::{BashoSummary, DivisionBoutCounts, KimariteCount, StandingRow},
  record::{BanzukeEntry, Bout},
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

/// Bout counts per division for `basho_id`. All six divisions are present.
pub async fn basho_summary<S: ResultsStore>(store: &S, basho_id: &str) -> Result<BashoSummary> {
  let id = require("bashoId", basho_id)?;
  let bout_filter = BoutFilter::basho(&id);

  let (basho, bouts) = tokio::try_join!(
    lift(store.fetch_basho(&id)),
    checked_bouts(store, &bout_filter),
  )?;
  if basho.is_none() {
    return Err(Error::BashoNotFound(id));
  }

  let mut divisions = DivisionBoutCounts::default();
  for bout in &bouts {
    divisions.get_mut(bout.division).bouts += 1;
  }

  Ok(BashoSummary { basho_id: id, divisions })
}

/// Every bout for one basho and division, in card order.
pub async fn bouts<S: ResultsStore>(
  store: &S,
  basho_id: &str,
  division: Division,
) -> Result<Vec<Bout>> {
  let id = require("bashoId", basho_id)?;
  let filter = BoutFilter::basho_division(&id, division);

  let mut bouts = checked_bouts(store, &filter).await?;
  bouts.sort_by(card_order);
  Ok(bouts)
}

/// Running record for one rostered rikishi.
struct Tally<'a> {
  entry:    &'a BanzukeEntry,
  wins:     u32,
  losses:   u32,
  kimarite: KimariteTally,
}

/// Division standings, ordered by performance with banzuke rank as the
/// tiebreak.
///
/// The banzuke defines the roster: bout participants without an entry for
/// this basho+division are ignored.
pub async fn standings<S: ResultsStore>(
  store: &S,
  basho_id: &str,
  division: Division,
) -> Result<Vec<StandingRow>> {
  let id = require("bashoId", basho_id)?;
  let entry_filter = BanzukeFilter::basho_division(&id, division);
  let bout_filter = BoutFilter::basho_division(&id, division);

  let (entries, bouts) = tokio::try_join!(
    checked_banzuke(store, &entry_filter),
    checked_bouts(store, &bout_filter),
  )?;

  let roster_ids: Vec<String> = entries.iter().map(|e| e.rikishi_id.clone()).collect();
  let roster = lift(store.fetch_rikishi_batch(&roster_ids)).await?;
  let shikona: HashMap<&str, &str> = roster
    .iter()
    .map(|r| (r.rikishi_id.as_str(), r.shikona.as_str()))
    .collect();

  let mut tallies: HashMap<&str, Tally<'_>> = entries
    .iter()
    .map(|entry| {
      (entry.rikishi_id.as_str(), Tally {
        entry,
        wins: 0,
        losses: 0,
        kimarite: KimariteTally::default(),
      })
    })
    .collect();

  for bout in &bouts {
    let Some(winner) = bout.winner_rikishi_id.as_deref() else { continue };
    if let Some(t) = tallies.get_mut(winner) {
      t.wins += 1;
      if let Some(k) = bout.kimarite_id.as_deref() {
        t.kimarite.record(k);
      }
    }
    if let Some(t) = bout.loser().and_then(|loser| tallies.get_mut(loser)) {
      t.losses += 1;
    }
  }

  let mut ordered: Vec<Tally<'_>> = tallies.into_values().collect();
  ordered.sort_by(|a, b| {
    standings_key(a.wins, a.losses, a.entry).cmp(&standings_key(b.wins, b.losses, b.entry))
  });

  ordered
    .into_iter()
    .map(|t| {
      let name = shikona.get(t.entry.rikishi_id.as_str()).ok_or_else(|| {
        Error::Invariant(format!(
          "banzuke entry references unknown rikishi {}",
          t.entry.rikishi_id
        ))
      })?;
      Ok(StandingRow {
        rikishi_id:         t.entry.rikishi_id.clone(),
        shikona:            (*name).to_owned(),
        rank:               t.entry.rank(),
        wins:               t.wins,
        losses:             t.losses,
        win_percentage:     ratio(t.wins, t.wins + t.losses),
        kimarite_breakdown: t
          .kimarite
          .ranked()
          .into_iter()
          .map(|(kimarite_id, count)| KimariteCount { kimarite_id, count })
          .collect(),
      })
    })
    .collect()
}
