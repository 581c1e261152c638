//! Read models: the shapes the engine returns.
//!
//! Never stored, always derived. All serialise to camelCase JSON; optional
//! values serialise as explicit `null` so response shapes are stable.

use serde::{Deserialize, Serialize};

use crate::{
  division::Division,
  record::{Bout, Outcome, Rikishi},
};

// ─── Career summary ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSummary {
  pub rikishi_id:       String,
  pub shikona:          String,
  pub heya:             Option<String>,
  pub debut_basho:      String,
  /// Last appearance, if it predates the latest basho in the dataset.
  pub retirement_basho: Option<String>,
  pub career_record:    CareerRecord,
  pub highest_rank:     HighestRank,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
  pub total_wins:     u32,
  pub total_losses:   u32,
  pub total_absences: u32,
}

impl CareerRecord {
  /// Tally `bouts`, all of which must involve `rikishi_id`.
  pub fn tally<'a>(rikishi_id: &str, bouts: impl IntoIterator<Item = &'a Bout>) -> Self {
    bouts.into_iter().fold(Self::default(), |mut rec, bout| {
      match bout.outcome_for(rikishi_id) {
        Outcome::Win => rec.total_wins += 1,
        Outcome::Loss => rec.total_losses += 1,
        Outcome::Absence => rec.total_absences += 1,
      }
      rec
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestRank {
  pub division: Division,
  pub rank:     String,
  pub basho_id: String,
}

// ─── Basho summary ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BashoSummary {
  pub basho_id:  String,
  pub divisions: DivisionBoutCounts,
}

/// Fixed-shape map: every division key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionBoutCounts {
  pub makuuchi:  DivisionBouts,
  pub juryo:     DivisionBouts,
  pub makushita: DivisionBouts,
  pub sandanme:  DivisionBouts,
  pub jonidan:   DivisionBouts,
  pub jonokuchi: DivisionBouts,
}

impl DivisionBoutCounts {
  pub fn get_mut(&mut self, division: Division) -> &mut DivisionBouts {
    match division {
      Division::Makuuchi => &mut self.makuuchi,
      Division::Juryo => &mut self.juryo,
      Division::Makushita => &mut self.makushita,
      Division::Sandanme => &mut self.sandanme,
      Division::Jonidan => &mut self.jonidan,
      Division::Jonokuchi => &mut self.jonokuchi,
    }
  }

  #[cfg(test)]
  pub fn get(&self, division: Division) -> DivisionBouts {
    match division {
      Division::Makuuchi => self.makuuchi,
      Division::Juryo => self.juryo,
      Division::Makushita => self.makushita,
      Division::Sandanme => self.sandanme,
      Division::Jonidan => self.jonidan,
      Division::Jonokuchi => self.jonokuchi,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionBouts {
  pub bouts: u32,
}

// ─── Head-to-head ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
  pub rikishi_a:      String,
  pub rikishi_b:      String,
  pub total_matches:  u32,
  pub rikishi_a_wins: u32,
  pub rikishi_b_wins: u32,
  pub last_match:     Option<LastMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMatch {
  pub basho_id:          String,
  pub division:          Division,
  pub day:               u32,
  pub winner_rikishi_id: Option<String>,
}

impl From<&Bout> for LastMatch {
  fn from(b: &Bout) -> Self {
    Self {
      basho_id:          b.basho_id.clone(),
      division:          b.division,
      day:               b.day,
      winner_rikishi_id: b.winner_rikishi_id.clone(),
    }
  }
}

// ─── Timeline ────────────────────────────────────────────────────────────────

/// One banzuke appearance with the win/loss record for that basho+division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
  pub basho_id: String,
  pub division: Division,
  pub rank:     String,
  pub wins:     u32,
  pub losses:   u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankProgressionItem {
  pub basho_id:    String,
  pub division:    Division,
  pub rank:        String,
  pub wins:        u32,
  pub losses:      u32,
  pub kachi_koshi: bool,
  pub make_koshi:  bool,
  /// Most wins in the division that basho. Co-leaders are all flagged;
  /// playoff results are not modelled.
  pub yusho:       bool,
}

// ─── Standings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KimariteCount {
  pub kimarite_id: String,
  pub count:       u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
  pub rikishi_id:         String,
  pub shikona:            String,
  pub rank:               String,
  pub wins:               u32,
  pub losses:             u32,
  /// `wins / (wins + losses)`, or 0 with no decided bouts.
  pub win_percentage:     f64,
  pub kimarite_breakdown: Vec<KimariteCount>,
}

// ─── Kimarite ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KimariteShare {
  pub kimarite_id: String,
  pub count:       u32,
  pub percentage:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KimariteStats {
  pub rikishi_id:         String,
  pub total_wins:         u32,
  pub total_losses:       u32,
  pub win_kimarite:       Vec<KimariteShare>,
  pub loss_kimarite:      Vec<KimariteShare>,
  pub most_used_kimarite: Option<String>,
}

// ─── Comparison ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RikishiIdentity {
  pub rikishi_id: String,
  pub shikona:    String,
  pub heya:       Option<String>,
}

impl From<Rikishi> for RikishiIdentity {
  fn from(r: Rikishi) -> Self {
    Self { rikishi_id: r.rikishi_id, shikona: r.shikona, heya: r.heya }
  }
}

/// The same statistic for both sides of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair<T> {
  pub a: T,
  pub b: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
  pub rikishi_a:          RikishiIdentity,
  pub rikishi_b:          RikishiIdentity,
  pub head_to_head:       HeadToHead,
  /// Number of distinct bashos on both rikishi's banzuke histories.
  pub common_basho_count: u32,
  pub kimarite:           Pair<KimariteStats>,
  /// Up to six most recent timeline rows per side.
  pub recent_form:        Pair<Vec<TimelineItem>>,
  pub last_match:         Option<LastMatch>,
}
