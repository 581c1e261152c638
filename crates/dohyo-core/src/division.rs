//! Division and side enumerations.
//!
//! Both are closed sets with a fixed total order. Declaration order *is* the
//! sort order, so `Ord` is derived rather than written by hand.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

// ─── Division ────────────────────────────────────────────────────────────────

/// One of the six competitive tiers, strongest first.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  EnumCount,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Division {
  Makuuchi,
  Juryo,
  Makushita,
  Sandanme,
  Jonidan,
  Jonokuchi,
}

impl Division {
  /// Parse a division name, ignoring ASCII case and surrounding whitespace.
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s.trim()).map_err(|_| Error::UnknownDivision(s.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.into() }

  /// Zero-based position in the strength ordering.
  pub fn index(self) -> usize { self as usize }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Board side of a banzuke entry. East is the primary side and sorts first.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
  East,
  West,
}

impl Side {
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s.trim()).map_err(|_| Error::UnknownSide(s.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.into() }

  /// One-letter code appended to a synthesized rank label.
  pub fn suffix(self) -> char {
    match self {
      Side::East => 'e',
      Side::West => 'w',
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn division_order_is_strongest_first() {
    let all: Vec<Division> = Division::iter().collect();
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(all, sorted);
    assert!(Division::Makuuchi < Division::Juryo);
    assert!(Division::Jonidan < Division::Jonokuchi);
    assert_eq!(Division::COUNT, 6);
  }

  #[test]
  fn division_parse_ignores_case() {
    assert_eq!(Division::parse("Makuuchi").unwrap(), Division::Makuuchi);
    assert_eq!(Division::parse(" JURYO ").unwrap(), Division::Juryo);
    assert!(matches!(
      Division::parse("komusubi"),
      Err(Error::UnknownDivision(v)) if v == "komusubi"
    ));
  }

  #[test]
  fn division_names_are_lowercase() {
    assert_eq!(Division::Sandanme.as_str(), "sandanme");
    assert_eq!(Division::Jonokuchi.to_string(), "jonokuchi");
    assert_eq!(
      serde_json::to_string(&Division::Makushita).unwrap(),
      "\"makushita\""
    );
  }

  #[test]
  fn east_sorts_before_west() {
    assert!(Side::East < Side::West);
    assert_eq!(Side::parse("WEST").unwrap(), Side::West);
    assert!(Side::parse("north").is_err());
  }
}
