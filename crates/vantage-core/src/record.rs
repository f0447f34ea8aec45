//! Record — one denormalized row of the insights table.
//!
//! A record is written once by the bulk-load path and never mutated or
//! deleted afterwards. Every field except `id` and `added` is nullable;
//! the dashboard endpoints pass nulls through unchanged.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A stored insight record. `id` and `added` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
  pub id:         i64,
  pub end_year:   Option<i64>,
  pub intensity:  Option<i64>,
  pub sector:     Option<String>,
  pub topic:      Option<String>,
  pub insight:    Option<String>,
  pub url:        Option<String>,
  pub region:     Option<String>,
  pub start_year: Option<i64>,
  pub impact:     Option<i64>,
  pub added:      DateTime<Utc>,
  pub published:  Option<DateTime<Utc>>,
  pub country:    Option<String>,
  pub relevance:  Option<i64>,
  pub pestle:     Option<String>,
  pub source:     Option<String>,
  pub title:      Option<String>,
  pub likelihood: Option<i64>,
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// The insert shape: a [`Record`] minus the store-assigned fields.
///
/// Deserialization is lenient because the upstream dataset export is messy:
/// numeric fields arrive as numbers, numeric strings, or empty strings, and
/// `published` arrives as either RFC 3339 or `"January, 20 2017 03:51:25"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewRecord {
  #[serde(deserialize_with = "de_lenient_i64")]
  pub end_year:   Option<i64>,
  #[serde(deserialize_with = "de_lenient_i64")]
  pub intensity:  Option<i64>,
  pub sector:     Option<String>,
  pub topic:      Option<String>,
  pub insight:    Option<String>,
  pub url:        Option<String>,
  pub region:     Option<String>,
  #[serde(deserialize_with = "de_lenient_i64")]
  pub start_year: Option<i64>,
  #[serde(deserialize_with = "de_lenient_i64")]
  pub impact:     Option<i64>,
  #[serde(deserialize_with = "de_lenient_datetime")]
  pub published:  Option<DateTime<Utc>>,
  pub country:    Option<String>,
  #[serde(deserialize_with = "de_lenient_i64")]
  pub relevance:  Option<i64>,
  pub pestle:     Option<String>,
  pub source:     Option<String>,
  pub title:      Option<String>,
  #[serde(deserialize_with = "de_lenient_i64")]
  pub likelihood: Option<i64>,
}

// ─── Lenient deserializers ───────────────────────────────────────────────────

fn de_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Int(i64),
    Float(f64),
    Text(String),
  }

  match Option::<Raw>::deserialize(deserializer)? {
    None => Ok(None),
    Some(Raw::Int(n)) => Ok(Some(n)),
    Some(Raw::Float(f)) => {
      // The scored fields are integers; a fractional value is bad data,
      // not something to truncate quietly.
      if f.fract() == 0.0 {
        Ok(Some(f as i64))
      } else {
        Err(de::Error::custom(format!("expected an integer, got {f}")))
      }
    }
    Some(Raw::Text(s)) => {
      let s = s.trim();
      if s.is_empty() {
        Ok(None)
      } else {
        s.parse().map(Some).map_err(de::Error::custom)
      }
    }
  }
}

fn de_lenient_datetime<'de, D>(
  deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<String>::deserialize(deserializer)? {
    None => Ok(None),
    Some(s) => {
      let s = s.trim();
      if s.is_empty() {
        Ok(None)
      } else {
        parse_loose_datetime(s).map(Some).map_err(de::Error::custom)
      }
    }
  }
}

/// Parse RFC 3339, or the dataset export's `"January, 20 2017 03:51:25"`.
fn parse_loose_datetime(s: &str) -> Result<DateTime<Utc>, String> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(s, "%B, %d %Y %H:%M:%S")
    .map(|ndt| ndt.and_utc())
    .map_err(|e| format!("unrecognised datetime {s:?}: {e}"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::{Datelike, Timelike};

  use super::*;

  #[test]
  fn new_record_decodes_numbers_and_numeric_strings() {
    let json = r#"{"intensity": 6, "relevance": "3", "end_year": ""}"#;
    let rec: NewRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec.intensity, Some(6));
    assert_eq!(rec.relevance, Some(3));
    assert_eq!(rec.end_year, None);
  }

  #[test]
  fn new_record_missing_fields_default_to_none() {
    let rec: NewRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(rec.sector, None);
    assert_eq!(rec.start_year, None);
    assert_eq!(rec.published, None);
  }

  #[test]
  fn published_parses_dataset_export_shape() {
    let json = r#"{"published": "January, 20 2017 03:51:25"}"#;
    let rec: NewRecord = serde_json::from_str(json).unwrap();
    let dt = rec.published.unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2017, 1, 20));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (3, 51, 25));
  }

  #[test]
  fn published_parses_rfc3339() {
    let json = r#"{"published": "2020-06-01T12:00:00Z"}"#;
    let rec: NewRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec.published.unwrap().year(), 2020);
  }

  #[test]
  fn published_empty_string_is_none() {
    let json = r#"{"published": ""}"#;
    let rec: NewRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec.published, None);
  }

  #[test]
  fn integral_float_decodes_to_its_integer() {
    let json = r#"{"intensity": 3.0}"#;
    let rec: NewRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec.intensity, Some(3));
  }

  #[test]
  fn fractional_float_is_an_error() {
    let json = r#"{"intensity": 3.7}"#;
    assert!(serde_json::from_str::<NewRecord>(json).is_err());
  }

  #[test]
  fn garbage_numeric_string_is_an_error() {
    let json = r#"{"impact": "high"}"#;
    assert!(serde_json::from_str::<NewRecord>(json).is_err());
  }
}
