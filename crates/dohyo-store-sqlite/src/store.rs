//! [`SqliteStore`], the SQLite implementation of [`ResultsStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use dohyo_core::{
  record::{BanzukeEntry, Basho, Bout, Rikishi},
  store::{BanzukeFilter, BoutFilter, ResultsStore},
};

use crate::{
  Result,
  encode::{
    BANZUKE_COLUMNS, BOUT_COLUMNS, RIKISHI_COLUMNS, RawBanzukeEntry, RawBout, encode_division,
    encode_side, rikishi_from_row,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Dohyo results store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Release the connection. Clones sharing it fail on their next call.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Fixture loading ───────────────────────────────────────────────────────
  //
  // The read path never writes. These exist so tests and local seeding can
  // populate a database without the ingestion pipeline.

  pub async fn insert_rikishi(&self, rikishi: &Rikishi) -> Result<()> {
    let r = rikishi.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO rikishi (rikishi_id, shikona, heya) VALUES (?1, ?2, ?3)",
          rusqlite::params![r.rikishi_id, r.shikona, r.heya],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub async fn insert_basho(&self, basho_id: &str) -> Result<()> {
    let id = basho_id.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute("INSERT INTO basho (basho_id) VALUES (?1)", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub async fn insert_banzuke_entry(&self, entry: &BanzukeEntry) -> Result<()> {
    let e = entry.clone();
    let division = encode_division(e.division);
    let side = encode_side(e.side);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO banzuke_entries (
             basho_id, rikishi_id, division, rank_value, side, rank_label
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            e.basho_id,
            e.rikishi_id,
            division,
            e.rank_value,
            side,
            e.rank_label,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub async fn insert_bout(&self, bout: &Bout) -> Result<()> {
    let b = bout.clone();
    let division = encode_division(b.division);
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bouts (
             bout_id, basho_id, division, day, bout_no,
             east_rikishi_id, west_rikishi_id, winner_rikishi_id, kimarite_id
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            b.bout_id,
            b.basho_id,
            division,
            b.day,
            b.bout_no,
            b.east_rikishi_id,
            b.west_rikishi_id,
            b.winner_rikishi_id,
            b.kimarite_id,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ResultsStore impl ───────────────────────────────────────────────────────

impl ResultsStore for SqliteStore {
  type Error = crate::Error;

  async fn fetch_rikishi(&self, rikishi_id: &str) -> Result<Option<Rikishi>> {
    let id = rikishi_id.to_owned();

    let rikishi = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {RIKISHI_COLUMNS} FROM rikishi WHERE rikishi_id = ?1"),
              rusqlite::params![id],
              rikishi_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(rikishi)
  }

  async fn fetch_rikishi_batch(&self, rikishi_ids: &[String]) -> Result<Vec<Rikishi>> {
    let ids_json = serde_json::to_string(rikishi_ids)?;

    let rikishi = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RIKISHI_COLUMNS} FROM rikishi
           WHERE rikishi_id IN (SELECT value FROM json_each(?1))"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![ids_json], rikishi_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rikishi)
  }

  async fn fetch_basho(&self, basho_id: &str) -> Result<Option<Basho>> {
    let id = basho_id.to_owned();

    let found: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT basho_id FROM basho WHERE basho_id = ?1",
              rusqlite::params![id],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(found.map(|basho_id| Basho { basho_id }))
  }

  async fn fetch_latest_basho(&self) -> Result<Option<Basho>> {
    let latest: Option<String> = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT MAX(basho_id) FROM (
             SELECT basho_id FROM basho
             UNION ALL SELECT basho_id FROM banzuke_entries
             UNION ALL SELECT basho_id FROM bouts
           )",
          [],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(latest.map(|basho_id| Basho { basho_id }))
  }

  async fn fetch_banzuke(&self, filter: &BanzukeFilter) -> Result<Vec<BanzukeEntry>> {
    let rikishi_id = filter.rikishi_id.clone();
    let basho_id   = filter.basho_id.clone();
    let division   = filter.division.map(encode_division);

    let raws: Vec<RawBanzukeEntry> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {BANZUKE_COLUMNS} FROM banzuke_entries
           WHERE (?1 IS NULL OR rikishi_id = ?1)
             AND (?2 IS NULL OR basho_id = ?2)
             AND (?3 IS NULL OR division = ?3)"
        ))?;
        let rows = stmt
          .query_map(
            rusqlite::params![rikishi_id, basho_id, division],
            RawBanzukeEntry::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBanzukeEntry::into_entry).collect()
  }

  async fn fetch_bouts(&self, filter: &BoutFilter) -> Result<Vec<Bout>> {
    let rikishi_id = filter.rikishi_id.clone();
    let (pair_a, pair_b) = filter.pair.clone().unzip();
    let basho_id   = filter.basho_id.clone();
    let division   = filter.division.map(encode_division);

    let raws: Vec<RawBout> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {BOUT_COLUMNS} FROM bouts
           WHERE (?1 IS NULL OR east_rikishi_id = ?1 OR west_rikishi_id = ?1)
             AND (?2 IS NULL
                  OR (east_rikishi_id = ?2 AND west_rikishi_id = ?3)
                  OR (east_rikishi_id = ?3 AND west_rikishi_id = ?2))
             AND (?4 IS NULL OR basho_id = ?4)
             AND (?5 IS NULL OR division = ?5)"
        ))?;
        let rows = stmt
          .query_map(
            rusqlite::params![rikishi_id, pair_a, pair_b, basho_id, division],
            RawBout::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBout::into_bout).collect()
  }
}

#[cfg(test)]
impl SqliteStore {
  /// Run raw SQL against the connection, bypassing the read API.
  pub(crate) async fn conn_for_tests<F>(&self, f: F)
  where
    F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<()> + Send + 'static,
  {
    self
      .conn
      .call(move |conn| Ok(f(conn)?))
      .await
      .expect("test sql");
  }
}
