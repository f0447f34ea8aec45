//! Handlers for the distribution endpoints.
//!
//! | Method | Path | Projection |
//! |--------|------|------------|
//! | `GET`  | `/get-source-distribution` | [`SourceDistribution`] |
//! | `GET`  | `/get-pastel-analysis` | [`CategoryBreakdown`] |
//! | `GET`  | `/get-gio-insights` | [`GeoInsight`] |
//!
//! The `pastel` and `gio` spellings are the dashboard front end's, kept
//! verbatim so existing clients keep working.

use std::sync::Arc;

use axum::{Json, extract::State};
use vantage_core::{
  projection::{CategoryBreakdown, GeoInsight, SourceDistribution},
  store::RecordStore,
};

use crate::error::ApiError;

/// `GET /get-source-distribution`
pub async fn source<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SourceDistribution>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(SourceDistribution::from).collect()))
}

/// `GET /get-pastel-analysis`
pub async fn category<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<CategoryBreakdown>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(CategoryBreakdown::from).collect()))
}

/// `GET /get-gio-insights`
pub async fn geo<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<GeoInsight>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(GeoInsight::from).collect()))
}
