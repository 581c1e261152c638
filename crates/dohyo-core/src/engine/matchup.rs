//! Two-rikishi queries: head-to-head record and the composite comparison.

use std::collections::HashSet;

use super::{
  career::{kimarite_stats, timeline},
  checked_banzuke, checked_bouts, count, lift, require,
};
use crate::{
  Error, Result,
  order::{chronology_order, recent_form_order},
  read::{Comparison, HeadToHead, LastMatch, Pair, RikishiIdentity, TimelineItem},
  record::BanzukeEntry,
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

/// How many timeline rows make up "recent form".
const RECENT_FORM_LEN: usize = 6;

/// All bouts between `rikishi_a` and `rikishi_b`, in either east/west
/// assignment.
///
/// Swapping the arguments swaps the win counts and nothing else.
pub async fn head_to_head<S: ResultsStore>(
  store: &S,
  rikishi_a: &str,
  rikishi_b: &str,
) -> Result<HeadToHead> {
  let a = require("rikishiA", rikishi_a)?;
  let b = require("rikishiB", rikishi_b)?;
  let filter = BoutFilter::pair(&a, &b);

  let mut bouts = checked_bouts(store, &filter).await?;
  bouts.sort_by(chronology_order);

  let wins_for = |id: &str| {
    count(
      bouts
        .iter()
        .filter(|bout| bout.winner_rikishi_id.as_deref() == Some(id))
        .count(),
    )
  };
  let rikishi_a_wins = wins_for(&a)?;
  let rikishi_b_wins = wins_for(&b)?;

  Ok(HeadToHead {
    total_matches: count(bouts.len())?,
    rikishi_a_wins,
    rikishi_b_wins,
    last_match: bouts.last().map(LastMatch::from),
    rikishi_a: a,
    rikishi_b: b,
  })
}

fn recent_form(mut items: Vec<TimelineItem>) -> Vec<TimelineItem> {
  items.sort_by(recent_form_order);
  items.truncate(RECENT_FORM_LEN);
  items
}

fn distinct_bashos(entries: &[BanzukeEntry]) -> HashSet<&str> {
  entries.iter().map(|e| e.basho_id.as_str()).collect()
}

/// Side-by-side view of two rikishi: head-to-head, kimarite profiles,
/// recent form and the number of bashos both appeared in.
///
/// Both identities must exist.
pub async fn comparison<S: ResultsStore>(
  store: &S,
  rikishi_a: &str,
  rikishi_b: &str,
) -> Result<Comparison> {
  let a_id = require("rikishiA", rikishi_a)?;
  let b_id = require("rikishiB", rikishi_b)?;

  let (a, b) = tokio::try_join!(
    lift(store.fetch_rikishi(&a_id)),
    lift(store.fetch_rikishi(&b_id)),
  )?;
  let a = a.ok_or_else(|| Error::RikishiNotFound(a_id.clone()))?;
  let b = b.ok_or_else(|| Error::RikishiNotFound(b_id.clone()))?;

  let entries_a_filter = BanzukeFilter::rikishi(&a_id);
  let entries_b_filter = BanzukeFilter::rikishi(&b_id);

  let (head_to_head, kimarite_a, kimarite_b, timeline_a, timeline_b, entries_a, entries_b) =
    tokio::try_join!(
      head_to_head(store, &a_id, &b_id),
      kimarite_stats(store, &a_id),
      kimarite_stats(store, &b_id),
      timeline(store, &a_id),
      timeline(store, &b_id),
      checked_banzuke(store, &entries_a_filter),
      checked_banzuke(store, &entries_b_filter),
    )?;

  let common_basho_count = count(
    distinct_bashos(&entries_a)
      .intersection(&distinct_bashos(&entries_b))
      .count(),
  )?;

  Ok(Comparison {
    rikishi_a: RikishiIdentity::from(a),
    rikishi_b: RikishiIdentity::from(b),
    last_match: head_to_head.last_match.clone(),
    head_to_head,
    common_basho_count,
    kimarite: Pair { a: kimarite_a, b: kimarite_b },
    recent_form: Pair { a: recent_form(timeline_a), b: recent_form(timeline_b) },
  })
}
