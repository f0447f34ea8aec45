//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{TimeZone, Utc};
use vantage_core::{record::NewRecord, store::RecordStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn energy_record() -> NewRecord {
  NewRecord {
    intensity:  Some(6),
    sector:     Some("Energy".into()),
    topic:      Some("gas".into()),
    insight:    Some("Annual gas demand rises".into()),
    url:        Some("https://example.com/gas".into()),
    region:     Some("Northern America".into()),
    start_year: Some(2019),
    impact:     Some(3),
    published:  Some(Utc.with_ymd_and_hms(2017, 1, 20, 3, 51, 25).unwrap()),
    country:    Some("United States of America".into()),
    relevance:  Some(2),
    pestle:     Some("Industries".into()),
    source:     Some("EIA".into()),
    title:      Some("U.S. natural gas consumption".into()),
    likelihood: Some(3),
    ..NewRecord::default()
  }
}

// ─── Empty store ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  let records = s.list_records().await.unwrap();
  assert!(records.is_empty());
}

// ─── Single inserts ──────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_added() {
  let s = store().await;
  let before = Utc::now();

  let record = s.insert_record(energy_record()).await.unwrap();
  assert!(record.id > 0);
  assert!(record.added >= before);
  assert_eq!(record.sector.as_deref(), Some("Energy"));
}

#[tokio::test]
async fn insert_then_list_roundtrips_fields() {
  let s = store().await;
  let inserted = s.insert_record(energy_record()).await.unwrap();

  let records = s.list_records().await.unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0], inserted);
}

#[tokio::test]
async fn ids_are_unique_across_inserts() {
  let s = store().await;
  let a = s.insert_record(energy_record()).await.unwrap();
  let b = s.insert_record(energy_record()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn null_fields_survive_the_roundtrip() {
  let s = store().await;

  // Only the store-assigned fields are non-null here.
  s.insert_record(NewRecord::default()).await.unwrap();

  let records = s.list_records().await.unwrap();
  assert_eq!(records.len(), 1);
  let r = &records[0];
  assert_eq!(r.sector, None);
  assert_eq!(r.intensity, None);
  assert_eq!(r.published, None);
  assert_eq!(r.start_year, None);
}

// ─── Bulk load ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn bulk_insert_reports_row_count() {
  let s = store().await;
  let batch = vec![energy_record(), NewRecord::default(), energy_record()];

  let inserted = s.insert_records(batch).await.unwrap();
  assert_eq!(inserted, 3);

  let records = s.list_records().await.unwrap();
  assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn bulk_insert_of_nothing_is_a_noop() {
  let s = store().await;
  assert_eq!(s.insert_records(vec![]).await.unwrap(), 0);
  assert!(s.list_records().await.unwrap().is_empty());
}

// ─── Read-after-write ────────────────────────────────────────────────────────

#[tokio::test]
async fn inserts_are_visible_to_subsequent_lists() {
  let s = store().await;

  for expected in 1..=4usize {
    s.insert_record(energy_record()).await.unwrap();
    assert_eq!(s.list_records().await.unwrap().len(), expected);
  }
}

#[tokio::test]
async fn listing_does_not_mutate_the_store() {
  let s = store().await;
  s.insert_record(energy_record()).await.unwrap();
  s.insert_record(NewRecord::default()).await.unwrap();

  let first = s.list_records().await.unwrap();
  let second = s.list_records().await.unwrap();
  assert_eq!(first, second);
}
