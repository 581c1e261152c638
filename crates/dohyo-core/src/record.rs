//! Fact records: the three append-only tables the engine reads, plus the
//! basho existence record.
//!
//! Records are created by an external ingestion pipeline and never altered
//! by this crate.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  division::{Division, Side},
  order::rank_display,
};

// ─── Identity ────────────────────────────────────────────────────────────────

/// A wrestler's identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rikishi {
  pub rikishi_id: String,
  /// Ring name, used for display.
  pub shikona:    String,
  /// Stable affiliation, when known.
  pub heya:       Option<String>,
}

/// A tournament period. `basho_id` is a zero-padded `YYYYMM` token, so plain
/// string order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basho {
  pub basho_id: String,
}

// ─── Banzuke ─────────────────────────────────────────────────────────────────

/// A rikishi's assigned position within a division for one basho.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanzukeEntry {
  pub basho_id:   String,
  pub rikishi_id: String,
  pub division:   Division,
  /// Position within the division; 1 is the top.
  pub rank_value: u32,
  pub side:       Side,
  /// Display override such as `"Komusubi"`.
  pub rank_label: Option<String>,
}

impl BanzukeEntry {
  /// The label shown to users: the override if present, else `"{n}{e|w}"`.
  pub fn rank(&self) -> String {
    rank_display(self.rank_label.as_deref(), self.rank_value, self.side)
  }

  /// Positions start at 1.
  pub fn validate(&self) -> Result<()> {
    if self.rank_value == 0 {
      return Err(Error::Invariant(format!(
        "banzuke entry for {} in {} has rank value 0",
        self.rikishi_id, self.basho_id
      )));
    }
    Ok(())
  }
}

// ─── Bouts ───────────────────────────────────────────────────────────────────

/// One scheduled bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bout {
  pub bout_id:           String,
  pub basho_id:          String,
  pub division:          Division,
  pub day:               u32,
  pub bout_no:           u32,
  pub east_rikishi_id:   String,
  pub west_rikishi_id:   String,
  /// `None` when the bout produced no result (absence or withdrawal).
  pub winner_rikishi_id: Option<String>,
  /// Winning technique; only meaningful when there is a winner.
  pub kimarite_id:       Option<String>,
}

/// How a bout ended from one participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Win,
  Loss,
  Absence,
}

impl Bout {
  pub fn involves(&self, rikishi_id: &str) -> bool {
    self.east_rikishi_id == rikishi_id || self.west_rikishi_id == rikishi_id
  }

  /// Outcome for `rikishi_id`, who is assumed to be one of the two sides.
  pub fn outcome_for(&self, rikishi_id: &str) -> Outcome {
    match self.winner_rikishi_id.as_deref() {
      None => Outcome::Absence,
      Some(w) if w == rikishi_id => Outcome::Win,
      Some(_) => Outcome::Loss,
    }
  }

  /// The losing side, when the recorded winner is one of the participants.
  pub fn loser(&self) -> Option<&str> {
    let winner = self.winner_rikishi_id.as_deref()?;
    if winner == self.east_rikishi_id {
      Some(&self.west_rikishi_id)
    } else if winner == self.west_rikishi_id {
      Some(&self.east_rikishi_id)
    } else {
      None
    }
  }

  /// The two sides differ and a recorded winner is one of them.
  pub fn validate(&self) -> Result<()> {
    if self.east_rikishi_id == self.west_rikishi_id {
      return Err(Error::Invariant(format!(
        "bout {} has {} on both sides",
        self.bout_id, self.east_rikishi_id
      )));
    }
    if let Some(winner) = self.winner_rikishi_id.as_deref()
      && !self.involves(winner)
    {
      return Err(Error::Invariant(format!(
        "bout {} winner {winner} is not a participant",
        self.bout_id
      )));
    }
    Ok(())
  }

  /// The technique credited to the winner, if the bout was decided.
  pub fn winning_kimarite(&self) -> Option<&str> {
    self.winner_rikishi_id.as_ref()?;
    self.kimarite_id.as_deref()
  }
}
