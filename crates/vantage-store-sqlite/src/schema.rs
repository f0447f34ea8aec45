//! SQL schema for the Vantage SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Records are written once by the bulk-load path and never updated or
-- deleted. Every column except the key and `added` is nullable.
CREATE TABLE IF NOT EXISTS records (
    record_id   INTEGER PRIMARY KEY,
    end_year    INTEGER,
    intensity   INTEGER,
    sector      TEXT,
    topic       TEXT,
    insight     TEXT,
    url         TEXT,
    region      TEXT,
    start_year  INTEGER,
    impact      INTEGER,
    added       TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    published   TEXT,            -- ISO 8601 UTC or NULL
    country     TEXT,
    relevance   INTEGER,
    pestle      TEXT,
    source      TEXT,
    title       TEXT,
    likelihood  INTEGER
);

PRAGMA user_version = 1;
";
