//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Divisions and sides are stored as their lowercase names. Decoding is the
//! validation boundary: an unknown value fails the whole read.

use dohyo_core::{
  Division, Side,
  record::{BanzukeEntry, Bout, Rikishi},
};

use crate::Result;

// ─── Division / Side ─────────────────────────────────────────────────────────

pub fn encode_division(d: Division) -> &'static str { d.as_str() }

pub fn decode_division(s: &str) -> Result<Division> { Ok(Division::parse(s)?) }

pub fn encode_side(s: Side) -> &'static str { s.as_str() }

pub fn decode_side(s: &str) -> Result<Side> { Ok(Side::parse(s)?) }

// ─── Row types ───────────────────────────────────────────────────────────────

pub const RIKISHI_COLUMNS: &str = "rikishi_id, shikona, heya";

pub fn rikishi_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Rikishi> {
  Ok(Rikishi {
    rikishi_id: row.get(0)?,
    shikona:    row.get(1)?,
    heya:       row.get(2)?,
  })
}

pub const BANZUKE_COLUMNS: &str =
  "basho_id, rikishi_id, division, rank_value, side, rank_label";

/// Raw values read directly from a `banzuke_entries` row.
pub struct RawBanzukeEntry {
  pub basho_id:   String,
  pub rikishi_id: String,
  pub division:   String,
  pub rank_value: u32,
  pub side:       String,
  pub rank_label: Option<String>,
}

impl RawBanzukeEntry {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      basho_id:   row.get(0)?,
      rikishi_id: row.get(1)?,
      division:   row.get(2)?,
      rank_value: row.get(3)?,
      side:       row.get(4)?,
      rank_label: row.get(5)?,
    })
  }

  pub fn into_entry(self) -> Result<BanzukeEntry> {
    Ok(BanzukeEntry {
      division:   decode_division(&self.division)?,
      side:       decode_side(&self.side)?,
      basho_id:   self.basho_id,
      rikishi_id: self.rikishi_id,
      rank_value: self.rank_value,
      rank_label: self.rank_label,
    })
  }
}

pub const BOUT_COLUMNS: &str = "bout_id, basho_id, division, day, bout_no, \
   east_rikishi_id, west_rikishi_id, winner_rikishi_id, kimarite_id";

/// Raw values read directly from a `bouts` row.
pub struct RawBout {
  pub bout_id:           String,
  pub basho_id:          String,
  pub division:          String,
  pub day:               u32,
  pub bout_no:           u32,
  pub east_rikishi_id:   String,
  pub west_rikishi_id:   String,
  pub winner_rikishi_id: Option<String>,
  pub kimarite_id:       Option<String>,
}

impl RawBout {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      bout_id:           row.get(0)?,
      basho_id:          row.get(1)?,
      division:          row.get(2)?,
      day:               row.get(3)?,
      bout_no:           row.get(4)?,
      east_rikishi_id:   row.get(5)?,
      west_rikishi_id:   row.get(6)?,
      winner_rikishi_id: row.get(7)?,
      kimarite_id:       row.get(8)?,
    })
  }

  pub fn into_bout(self) -> Result<Bout> {
    Ok(Bout {
      division:          decode_division(&self.division)?,
      bout_id:           self.bout_id,
      basho_id:          self.basho_id,
      day:               self.day,
      bout_no:           self.bout_no,
      east_rikishi_id:   self.east_rikishi_id,
      west_rikishi_id:   self.west_rikishi_id,
      winner_rikishi_id: self.winner_rikishi_id,
      kimarite_id:       self.kimarite_id,
    })
  }
}
