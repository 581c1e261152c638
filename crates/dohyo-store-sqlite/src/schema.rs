//! SQL schema for the Dohyo SQLite store.
//!
//! Executed once at connection startup. The tables are written by the
//! ingestion pipeline; this crate only reads them outside of tests.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS rikishi (
    rikishi_id  TEXT PRIMARY KEY,
    shikona     TEXT NOT NULL,
    heya        TEXT
);

CREATE TABLE IF NOT EXISTS basho (
    basho_id    TEXT PRIMARY KEY      -- zero-padded YYYYMM
);

-- One row per rikishi per basho they were ranked in.
CREATE TABLE IF NOT EXISTS banzuke_entries (
    basho_id    TEXT    NOT NULL,
    rikishi_id  TEXT    NOT NULL REFERENCES rikishi(rikishi_id),
    division    TEXT    NOT NULL,     -- 'makuuchi' | ... | 'jonokuchi'
    rank_value  INTEGER NOT NULL CHECK (rank_value > 0),
    side        TEXT    NOT NULL,     -- 'east' | 'west'
    rank_label  TEXT,
    PRIMARY KEY (basho_id, rikishi_id)
);

CREATE TABLE IF NOT EXISTS bouts (
    bout_id            TEXT    PRIMARY KEY,
    basho_id           TEXT    NOT NULL,
    division           TEXT    NOT NULL,
    day                INTEGER NOT NULL,
    bout_no            INTEGER NOT NULL,
    east_rikishi_id    TEXT    NOT NULL,
    west_rikishi_id    TEXT    NOT NULL,
    winner_rikishi_id  TEXT,          -- NULL: no result for either side
    kimarite_id        TEXT,
    CHECK (east_rikishi_id != west_rikishi_id),
    CHECK (winner_rikishi_id IS NULL
           OR winner_rikishi_id IN (east_rikishi_id, west_rikishi_id))
);

CREATE INDEX IF NOT EXISTS banzuke_rikishi_idx  ON banzuke_entries(rikishi_id);
CREATE INDEX IF NOT EXISTS banzuke_division_idx ON banzuke_entries(basho_id, division);
CREATE INDEX IF NOT EXISTS bouts_east_idx       ON bouts(east_rikishi_id);
CREATE INDEX IF NOT EXISTS bouts_west_idx       ON bouts(west_rikishi_id);
CREATE INDEX IF NOT EXISTS bouts_division_idx   ON bouts(basho_id, division);

PRAGMA user_version = 1;
";
