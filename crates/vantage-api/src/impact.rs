//! Handlers for the impact endpoints.
//!
//! | Method | Path | Projection |
//! |--------|------|------------|
//! | `GET`  | `/get-sector-impact-data` | [`SectorImpact`] |
//! | `GET`  | `/get-risk-likelihood` | [`RiskLikelihood`] |

use std::sync::Arc;

use axum::{Json, extract::State};
use vantage_core::{
  projection::{RiskLikelihood, SectorImpact},
  store::RecordStore,
};

use crate::error::ApiError;

/// `GET /get-sector-impact-data`
pub async fn sector<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SectorImpact>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(SectorImpact::from).collect()))
}

/// `GET /get-risk-likelihood`
pub async fn risk<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<RiskLikelihood>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(RiskLikelihood::from).collect()))
}
