//! Ordering primitives and the composite sort keys built from them.
//!
//! Several read models sort the same fields (basho, division, rank, side) in
//! different priority orders. Each order gets its own named key function here
//! so the variants cannot silently drift into one another:
//!
//! | Key                  | Fields                                               |
//! |----------------------|------------------------------------------------------|
//! | [`banzuke_key`]      | basho ↑, division ↑, rank ↑, side ↑                  |
//! | [`peak_rank_key`]    | division ↑, rank ↑, side ↑, basho ↑                  |
//! | [`card_key`]         | day ↑, bout no ↑, bout id ↑                          |
//! | [`chronology_key`]   | basho ↑, day ↑, bout no ↑, bout id ↑                 |
//! | [`standings_key`]    | wins ↓, losses ↑, rank ↑, side ↑, rikishi id ↑       |
//! | [`kimarite_key`]     | count ↓, kimarite id ↑                               |
//! | [`recent_form_key`]  | basho ↓, division ↑, rank label ↑, wins ↓, losses ↑  |

use std::cmp::{Ordering, Reverse};

use crate::{
  division::{Division, Side},
  read::TimelineItem,
  record::{BanzukeEntry, Bout},
};

// ─── Primitives ──────────────────────────────────────────────────────────────

pub fn compare_division(a: Division, b: Division) -> Ordering { a.cmp(&b) }

/// Basho ids are zero-padded, so byte order is chronological order.
pub fn compare_basho(a: &str, b: &str) -> Ordering { a.cmp(b) }

pub fn compare_side(a: Side, b: Side) -> Ordering { a.cmp(&b) }

/// Trimmed `label` if it is non-blank, otherwise `"{position}{suffix}"`.
pub fn rank_display(label: Option<&str>, position: u32, side: Side) -> String {
  match label.map(str::trim) {
    Some(l) if !l.is_empty() => l.to_owned(),
    _ => format!("{position}{}", side.suffix()),
  }
}

// ─── Banzuke keys ────────────────────────────────────────────────────────────

/// Chronological career order: debut first, latest appearance last.
pub fn banzuke_key(e: &BanzukeEntry) -> (&str, Division, u32, Side) {
  (&e.basho_id, e.division, e.rank_value, e.side)
}

/// Best rank ever held first; earliest basho wins a tie.
pub fn peak_rank_key(e: &BanzukeEntry) -> (Division, u32, Side, &str) {
  (e.division, e.rank_value, e.side, &e.basho_id)
}

pub fn banzuke_order(a: &BanzukeEntry, b: &BanzukeEntry) -> Ordering {
  banzuke_key(a).cmp(&banzuke_key(b))
}

pub fn peak_rank_order(a: &BanzukeEntry, b: &BanzukeEntry) -> Ordering {
  peak_rank_key(a).cmp(&peak_rank_key(b))
}

// ─── Bout keys ───────────────────────────────────────────────────────────────

/// Order of bouts within one basho and division.
pub fn card_key(b: &Bout) -> (u32, u32, &str) {
  (b.day, b.bout_no, &b.bout_id)
}

/// Order of bouts across bashos.
pub fn chronology_key(b: &Bout) -> (&str, u32, u32, &str) {
  (&b.basho_id, b.day, b.bout_no, &b.bout_id)
}

pub fn card_order(a: &Bout, b: &Bout) -> Ordering { card_key(a).cmp(&card_key(b)) }

pub fn chronology_order(a: &Bout, b: &Bout) -> Ordering {
  chronology_key(a).cmp(&chronology_key(b))
}

// ─── Aggregate keys ──────────────────────────────────────────────────────────

/// Performance first, pre-tournament rank as the tiebreak.
pub fn standings_key(
  wins: u32,
  losses: u32,
  entry: &BanzukeEntry,
) -> (Reverse<u32>, u32, u32, Side, &str) {
  (Reverse(wins), losses, entry.rank_value, entry.side, &entry.rikishi_id)
}

pub fn kimarite_key(kimarite_id: &str, count: u32) -> (Reverse<u32>, &str) {
  (Reverse(count), kimarite_id)
}

/// Most recent basho first.
pub fn recent_form_key(
  item: &TimelineItem,
) -> (Reverse<&str>, Division, &str, Reverse<u32>, u32) {
  (
    Reverse(item.basho_id.as_str()),
    item.division,
    item.rank.as_str(),
    Reverse(item.wins),
    item.losses,
  )
}

pub fn recent_form_order(a: &TimelineItem, b: &TimelineItem) -> Ordering {
  recent_form_key(a).cmp(&recent_form_key(b))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(basho: &str, division: Division, rank: u32, side: Side) -> BanzukeEntry {
    BanzukeEntry {
      basho_id:   basho.into(),
      rikishi_id: "r1".into(),
      division,
      rank_value: rank,
      side,
      rank_label: None,
    }
  }

  #[test]
  fn rank_display_prefers_trimmed_label() {
    assert_eq!(rank_display(Some("  Ozeki "), 1, Side::East), "Ozeki");
    assert_eq!(rank_display(Some("   "), 4, Side::West), "4w");
    assert_eq!(rank_display(None, 12, Side::East), "12e");
  }

  #[test]
  fn primitives_are_total() {
    assert_eq!(compare_basho("202401", "202403"), Ordering::Less);
    assert_eq!(compare_basho("202401", "202401"), Ordering::Equal);
    assert_eq!(compare_division(Division::Juryo, Division::Makuuchi), Ordering::Greater);
    assert_eq!(compare_side(Side::East, Side::West), Ordering::Less);
    assert_eq!(compare_side(Side::West, Side::West), Ordering::Equal);
  }

  #[test]
  fn banzuke_and_peak_orders_differ() {
    let early_low  = entry("202301", Division::Sandanme, 5, Side::East);
    let late_high  = entry("202401", Division::Makuuchi, 3, Side::West);

    assert_eq!(banzuke_order(&early_low, &late_high), Ordering::Less);
    assert_eq!(peak_rank_order(&early_low, &late_high), Ordering::Greater);
  }

  #[test]
  fn peak_rank_tie_goes_to_earliest_basho() {
    let first  = entry("202201", Division::Juryo, 2, Side::East);
    let repeat = entry("202305", Division::Juryo, 2, Side::East);
    assert_eq!(peak_rank_order(&first, &repeat), Ordering::Less);
  }

  #[test]
  fn standings_key_sorts_wins_descending() {
    let top    = entry("202401", Division::Juryo, 1, Side::East);
    let bottom = entry("202401", Division::Juryo, 14, Side::West);
    assert!(standings_key(10, 5, &bottom) < standings_key(9, 6, &top));
    assert!(standings_key(8, 7, &top) < standings_key(8, 7, &bottom));
    assert!(standings_key(8, 6, &bottom) < standings_key(8, 7, &top));
  }

  #[test]
  fn recent_form_sorts_latest_basho_first() {
    let item = |basho: &str, wins: u32| TimelineItem {
      basho_id: basho.into(),
      division: Division::Makuuchi,
      rank:     "1e".into(),
      wins,
      losses:   15 - wins,
    };
    let mut items = vec![item("202301", 9), item("202405", 4), item("202403", 11)];
    items.sort_by(recent_form_order);
    let order: Vec<&str> = items.iter().map(|i| i.basho_id.as_str()).collect();
    assert_eq!(order, ["202405", "202403", "202301"]);
  }

  #[test]
  fn recent_form_breaks_ties_within_a_basho() {
    let item = |basho: &str, division, rank: &str, wins, losses| TimelineItem {
      basho_id: String::from(basho),
      division,
      rank: rank.into(),
      wins,
      losses,
    };
    let older     = item("202401", Division::Makuuchi, "1e", 15, 0);
    let juryo     = item("202403", Division::Juryo, "1e", 15, 0);
    let label     = item("202403", Division::Makuuchi, "1w", 3, 12);
    let most_wins = item("202403", Division::Makuuchi, "2e", 10, 5);
    let fewer_l   = item("202403", Division::Makuuchi, "2e", 8, 5);
    let more_l    = item("202403", Division::Makuuchi, "2e", 8, 7);

    let mut items = vec![
      older.clone(),
      more_l.clone(),
      juryo.clone(),
      fewer_l.clone(),
      label.clone(),
      most_wins.clone(),
    ];
    items.sort_by(recent_form_order);

    // basho desc, then division, then rank label, then wins desc, losses asc.
    assert_eq!(items, [label, most_wins, fewer_l, more_l, juryo, older]);
  }
}
