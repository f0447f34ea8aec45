//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use vantage_core::{
  record::{NewRecord, Record},
  store::RecordStore,
};

use crate::{
  Error, Result,
  encode::{RawRecord, encode_dt},
  schema::SCHEMA,
};

const INSERT_RECORD_SQL: &str = "INSERT INTO records (
     end_year, intensity, sector, topic, insight, url, region,
     start_year, impact, added, published, country, relevance,
     pestle, source, title, likelihood
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Vantage record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
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

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
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
}

/// Build a [`Record`] out of an insert input and the store-assigned parts.
fn assemble(id: i64, added: DateTime<Utc>, input: NewRecord) -> Record {
  Record {
    id,
    end_year:   input.end_year,
    intensity:  input.intensity,
    sector:     input.sector,
    topic:      input.topic,
    insight:    input.insight,
    url:        input.url,
    region:     input.region,
    start_year: input.start_year,
    impact:     input.impact,
    added,
    published:  input.published,
    country:    input.country,
    relevance:  input.relevance,
    pestle:     input.pestle,
    source:     input.source,
    title:      input.title,
    likelihood: input.likelihood,
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn insert_record(&self, input: NewRecord) -> Result<Record> {
    let added = Utc::now();
    let added_str = encode_dt(added);
    let published_str = input.published.map(encode_dt);
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          INSERT_RECORD_SQL,
          rusqlite::params![
            row.end_year,
            row.intensity,
            row.sector,
            row.topic,
            row.insight,
            row.url,
            row.region,
            row.start_year,
            row.impact,
            added_str,
            published_str,
            row.country,
            row.relevance,
            row.pestle,
            row.source,
            row.title,
            row.likelihood,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(assemble(id, added, input))
  }

  async fn insert_records(&self, inputs: Vec<NewRecord>) -> Result<usize> {
    // One `added` timestamp per batch, taken when the load starts.
    let added_str = encode_dt(Utc::now());

    let count = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(INSERT_RECORD_SQL)?;
          for input in &inputs {
            stmt.execute(rusqlite::params![
              input.end_year,
              input.intensity,
              input.sector,
              input.topic,
              input.insight,
              input.url,
              input.region,
              input.start_year,
              input.impact,
              added_str,
              input.published.map(encode_dt),
              input.country,
              input.relevance,
              input.pestle,
              input.source,
              input.title,
              input.likelihood,
            ])?;
          }
        }
        tx.commit()?;
        Ok(inputs.len())
      })
      .await?;

    Ok(count)
  }

  async fn list_records(&self) -> Result<Vec<Record>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             record_id, end_year, intensity, sector, topic, insight, url,
             region, start_year, impact, added, published, country,
             relevance, pestle, source, title, likelihood
           FROM records",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RawRecord {
              record_id:  row.get(0)?,
              end_year:   row.get(1)?,
              intensity:  row.get(2)?,
              sector:     row.get(3)?,
              topic:      row.get(4)?,
              insight:    row.get(5)?,
              url:        row.get(6)?,
              region:     row.get(7)?,
              start_year: row.get(8)?,
              impact:     row.get(9)?,
              added:      row.get(10)?,
              published:  row.get(11)?,
              country:    row.get(12)?,
              relevance:  row.get(13)?,
              pestle:     row.get(14)?,
              source:     row.get(15)?,
              title:      row.get(16)?,
              likelihood: row.get(17)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
