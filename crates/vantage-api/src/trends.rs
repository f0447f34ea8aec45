//! Handlers for the trend endpoints.
//!
//! | Method | Path | Projection |
//! |--------|------|------------|
//! | `GET`  | `/get-energy-consumption-trends` | [`ConsumptionTrend`] |
//! | `GET`  | `/get-time-based-trends` | [`TimeTrend`] |

use std::sync::Arc;

use axum::{Json, extract::State};
use vantage_core::{
  projection::{ConsumptionTrend, TimeTrend},
  store::RecordStore,
};

use crate::error::ApiError;

/// `GET /get-energy-consumption-trends`
pub async fn consumption<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ConsumptionTrend>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(ConsumptionTrend::from).collect()))
}

/// `GET /get-time-based-trends`
pub async fn time_based<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TimeTrend>>, ApiError>
where
  S: RecordStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(records.iter().map(TimeTrend::from).collect()))
}
