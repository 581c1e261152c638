//! Per-rikishi queries: career summary, timeline, rank progression and
//! kimarite statistics.

use std::collections::HashMap;

use super::{KimariteTally, checked_banzuke, checked_bouts, lift, ratio, require};
use crate::{
  Error, Result,
  division::Division,
  order::{banzuke_order, peak_rank_order},
  read::{
    CareerRecord, CareerSummary, HighestRank, KimariteShare, KimariteStats,
    RankProgressionItem, TimelineItem,
  },
  record::{Bout, Outcome},
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

/// Decided-bout record for one (basho, division).
#[derive(Debug, Clone, Copy, Default)]
struct WinLoss {
  wins:   u32,
  losses: u32,
}

type BashoKey<'a> = (&'a str, Division);

/// Group `rikishi_id`'s bouts by (basho, division). Absences count toward
/// neither side.
fn records_by_basho<'a>(rikishi_id: &str, bouts: &'a [Bout]) -> HashMap<BashoKey<'a>, WinLoss> {
  let mut records: HashMap<BashoKey<'a>, WinLoss> = HashMap::new();
  for bout in bouts {
    let rec = records.entry((bout.basho_id.as_str(), bout.division)).or_default();
    match bout.outcome_for(rikishi_id) {
      Outcome::Win => rec.wins += 1,
      Outcome::Loss => rec.losses += 1,
      Outcome::Absence => {}
    }
  }
  records
}

/// Build the career summary for `rikishi_id`.
///
/// Fails with [`Error::RikishiNotFound`] if the identity is missing and with
/// [`Error::NoBanzukeEntries`] if the rikishi was never ranked.
pub async fn rikishi_summary<S: ResultsStore>(
  store: &S,
  rikishi_id: &str,
) -> Result<CareerSummary> {
  let id = require("rikishiId", rikishi_id)?;
  let entry_filter = BanzukeFilter::rikishi(&id);
  let bout_filter = BoutFilter::rikishi(&id);

  let (rikishi, mut entries, bouts, latest) = tokio::try_join!(
    lift(store.fetch_rikishi(&id)),
    checked_banzuke(store, &entry_filter),
    checked_bouts(store, &bout_filter),
    lift(store.fetch_latest_basho()),
  )?;

  let rikishi = rikishi.ok_or_else(|| Error::RikishiNotFound(id.clone()))?;

  entries.sort_by(banzuke_order);
  let (Some(debut), Some(last), Some(peak)) = (
    entries.first(),
    entries.last(),
    entries.iter().min_by(|a, b| peak_rank_order(a, b)),
  ) else {
    return Err(Error::NoBanzukeEntries(id));
  };

  let retirement_basho = latest
    .filter(|latest| last.basho_id < latest.basho_id)
    .map(|_| last.basho_id.clone());

  Ok(CareerSummary {
    rikishi_id: rikishi.rikishi_id,
    shikona: rikishi.shikona,
    heya: rikishi.heya,
    debut_basho: debut.basho_id.clone(),
    retirement_basho,
    career_record: CareerRecord::tally(&id, &bouts),
    highest_rank: HighestRank {
      division: peak.division,
      rank:     peak.rank(),
      basho_id: peak.basho_id.clone(),
    },
  })
}

/// Every banzuke appearance of `rikishi_id` in career order, each with the
/// win/loss record for that basho+division (0-0 when no bouts exist).
pub async fn timeline<S: ResultsStore>(store: &S, rikishi_id: &str) -> Result<Vec<TimelineItem>> {
  let id = require("rikishiId", rikishi_id)?;
  let entry_filter = BanzukeFilter::rikishi(&id);
  let bout_filter = BoutFilter::rikishi(&id);

  let (mut entries, bouts) = tokio::try_join!(
    checked_banzuke(store, &entry_filter),
    checked_bouts(store, &bout_filter),
  )?;

  let records = records_by_basho(&id, &bouts);
  entries.sort_by(banzuke_order);

  Ok(
    entries
      .iter()
      .map(|entry| {
        let rec = records
          .get(&(entry.basho_id.as_str(), entry.division))
          .copied()
          .unwrap_or_default();
        TimelineItem {
          basho_id: entry.basho_id.clone(),
          division: entry.division,
          rank:     entry.rank(),
          wins:     rec.wins,
          losses:   rec.losses,
        }
      })
      .collect(),
  )
}

/// The timeline annotated with kachi-koshi, make-koshi and yusho flags.
///
/// Yusho means `wins > 0` and `wins` equals the most wins by any winner in
/// that basho+division across the whole dataset.
pub async fn rank_progression<S: ResultsStore>(
  store: &S,
  rikishi_id: &str,
) -> Result<Vec<RankProgressionItem>> {
  let id = require("rikishiId", rikishi_id)?;
  let all_bouts = BoutFilter::default();

  let (items, bouts) = tokio::try_join!(
    timeline(store, &id),
    checked_bouts(store, &all_bouts),
  )?;

  let mut wins_by_winner: HashMap<BashoKey<'_>, HashMap<&str, u32>> = HashMap::new();
  for bout in &bouts {
    let Some(winner) = bout.winner_rikishi_id.as_deref() else { continue };
    *wins_by_winner
      .entry((bout.basho_id.as_str(), bout.division))
      .or_default()
      .entry(winner)
      .or_default() += 1;
  }

  let max_wins: HashMap<BashoKey<'_>, u32> = wins_by_winner
    .into_iter()
    .map(|(key, by_rikishi)| (key, by_rikishi.into_values().max().unwrap_or(0)))
    .collect();

  Ok(
    items
      .into_iter()
      .map(|item| {
        let top = max_wins
          .get(&(item.basho_id.as_str(), item.division))
          .copied()
          .unwrap_or(0);
        RankProgressionItem {
          kachi_koshi: item.wins > item.losses,
          make_koshi:  item.losses > item.wins,
          yusho:       item.wins > 0 && item.wins == top,
          basho_id:    item.basho_id,
          division:    item.division,
          rank:        item.rank,
          wins:        item.wins,
          losses:      item.losses,
        }
      })
      .collect(),
  )
}

/// Technique frequencies over `rikishi_id`'s whole bout history, split into
/// techniques won with and techniques lost to.
pub async fn kimarite_stats<S: ResultsStore>(store: &S, rikishi_id: &str) -> Result<KimariteStats> {
  let id = require("rikishiId", rikishi_id)?;
  let bout_filter = BoutFilter::rikishi(&id);
  let bouts = checked_bouts(store, &bout_filter).await?;

  let mut total_wins = 0;
  let mut total_losses = 0;
  let mut won_with = KimariteTally::default();
  let mut lost_to = KimariteTally::default();

  for bout in &bouts {
    match bout.outcome_for(&id) {
      Outcome::Absence => {}
      Outcome::Win => {
        total_wins += 1;
        if let Some(k) = bout.winning_kimarite() {
          won_with.record(k);
        }
      }
      Outcome::Loss => {
        total_losses += 1;
        if let Some(k) = bout.winning_kimarite() {
          lost_to.record(k);
        }
      }
    }
  }

  let shares = |tally: KimariteTally, total: u32| -> Vec<KimariteShare> {
    tally
      .ranked()
      .into_iter()
      .map(|(kimarite_id, count)| KimariteShare {
        kimarite_id,
        count,
        percentage: ratio(count, total),
      })
      .collect()
  };

  let win_kimarite = shares(won_with, total_wins);
  let loss_kimarite = shares(lost_to, total_losses);
  let most_used_kimarite = win_kimarite.first().map(|k| k.kimarite_id.clone());

  Ok(KimariteStats {
    rikishi_id: id,
    total_wins,
    total_losses,
    win_kimarite,
    loss_kimarite,
    most_used_kimarite,
  })
}
