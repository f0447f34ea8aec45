//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Integers and text map
//! directly onto SQLite column types.

use chrono::{DateTime, Utc};
use vantage_core::record::Record;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `records` row.
pub struct RawRecord {
  pub record_id:  i64,
  pub end_year:   Option<i64>,
  pub intensity:  Option<i64>,
  pub sector:     Option<String>,
  pub topic:      Option<String>,
  pub insight:    Option<String>,
  pub url:        Option<String>,
  pub region:     Option<String>,
  pub start_year: Option<i64>,
  pub impact:     Option<i64>,
  pub added:      String,
  pub published:  Option<String>,
  pub country:    Option<String>,
  pub relevance:  Option<i64>,
  pub pestle:     Option<String>,
  pub source:     Option<String>,
  pub title:      Option<String>,
  pub likelihood: Option<i64>,
}

impl RawRecord {
  pub fn into_record(self) -> Result<Record> {
    let added = decode_dt(&self.added)?;
    let published = self.published.as_deref().map(decode_dt).transpose()?;

    Ok(Record {
      id:         self.record_id,
      end_year:   self.end_year,
      intensity:  self.intensity,
      sector:     self.sector,
      topic:      self.topic,
      insight:    self.insight,
      url:        self.url,
      region:     self.region,
      start_year: self.start_year,
      impact:     self.impact,
      added,
      published,
      country:    self.country,
      relevance:  self.relevance,
      pestle:     self.pestle,
      source:     self.source,
      title:      self.title,
      likelihood: self.likelihood,
    })
  }
}
