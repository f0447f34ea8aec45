//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `vantage-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.
//!
//! The HTTP surface is read-only; the insert operations exist for the
//! bulk-load collaborator and for tests, and are never routed.

use std::future::Future;

use crate::record::{NewRecord, Record};

/// Abstraction over a Vantage record store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a single record. The store assigns `id` and `added` and
  /// returns the stored row.
  fn insert_record(
    &self,
    input: NewRecord,
  ) -> impl Future<Output = Result<Record, Self::Error>> + Send + '_;

  /// Persist a batch of records in one transaction. Returns the number of
  /// rows inserted.
  fn insert_records(
    &self,
    inputs: Vec<NewRecord>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Return every stored record, in whatever order the store yields them.
  /// The only read operation the dashboard endpoints need.
  fn list_records(
    &self,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;
}
