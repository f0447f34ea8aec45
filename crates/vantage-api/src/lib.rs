//! JSON read API for Vantage.
//!
//! Exposes an axum [`Router`] backed by any [`vantage_core::store::RecordStore`].
//! CORS, TLS, and transport concerns are the caller's responsibility.
//!
//! All seven routes follow the same pattern: fetch every record, map each
//! one through a fixed field selection, return the list as a JSON array.
//! No query parameters, no pagination, no write path.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = vantage_api::api_router(store.clone());
//! ```

pub mod distribution;
pub mod error;
pub mod impact;
pub mod trends;

use std::sync::Arc;

use axum::{Router, routing::get};
use vantage_core::store::RecordStore;

pub use error::ApiError;


/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Trends
    .route("/get-energy-consumption-trends", get(trends::consumption::<S>))
    .route("/get-time-based-trends", get(trends::time_based::<S>))
    // Impact
    .route("/get-sector-impact-data", get(impact::sector::<S>))
    .route("/get-risk-likelihood", get(impact::risk::<S>))
    // Distributions
    .route("/get-source-distribution", get(distribution::source::<S>))
    .route("/get-pastel-analysis", get(distribution::category::<S>))
    .route("/get-gio-insights", get(distribution::geo::<S>))
    .with_state(store)
}
