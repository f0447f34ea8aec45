//! The seven dashboard projections of a [`Record`].
//!
//! Each projection is a plain data-transfer struct: a fixed subset of record
//! fields under the key names the dashboard front end expects. Built from a
//! record with `From<&Record>`; no filtering, no aggregation.
//!
//! | Endpoint | Projection | Renames |
//! |----------|------------|---------|
//! | `/get-energy-consumption-trends` | [`ConsumptionTrend`] | `consumption` ← intensity, `year` ← start_year |
//! | `/get-sector-impact-data` | [`SectorImpact`] | none |
//! | `/get-risk-likelihood` | [`RiskLikelihood`] | `risk` ← insight |
//! | `/get-source-distribution` | [`SourceDistribution`] | `label` ← sector, `value` ← relevance |
//! | `/get-pastel-analysis` | [`CategoryBreakdown`] | `category` ← pestle, `year` ← start_year |
//! | `/get-gio-insights` | [`GeoInsight`] | `id` ← country, `value` ← relevance |
//! | `/get-time-based-trends` | [`TimeTrend`] | `date` ← published, `value` ← relevance |

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::Record;

// ─── Consumption trends ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionTrend {
  pub consumption: Option<i64>,
  pub sector:      Option<String>,
  pub year:        Option<i64>,
}

impl From<&Record> for ConsumptionTrend {
  fn from(r: &Record) -> Self {
    Self {
      consumption: r.intensity,
      sector:      r.sector.clone(),
      year:        r.start_year,
    }
  }
}

// ─── Sector impact ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorImpact {
  pub impact:    Option<i64>,
  pub sector:    Option<String>,
  pub intensity: Option<i64>,
  pub relevance: Option<i64>,
}

impl From<&Record> for SectorImpact {
  fn from(r: &Record) -> Self {
    Self {
      impact:    r.impact,
      sector:    r.sector.clone(),
      intensity: r.intensity,
      relevance: r.relevance,
    }
  }
}

// ─── Risk / likelihood ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskLikelihood {
  pub impact:     Option<i64>,
  pub likelihood: Option<i64>,
  pub risk:       Option<String>,
  pub relevance:  Option<i64>,
}

impl From<&Record> for RiskLikelihood {
  fn from(r: &Record) -> Self {
    Self {
      impact:     r.impact,
      likelihood: r.likelihood,
      risk:       r.insight.clone(),
      relevance:  r.relevance,
    }
  }
}

// ─── Source distribution ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceDistribution {
  pub label: Option<String>,
  pub value: Option<i64>,
}

impl From<&Record> for SourceDistribution {
  fn from(r: &Record) -> Self {
    Self {
      label: r.sector.clone(),
      value: r.relevance,
    }
  }
}

// ─── Category breakdown (PESTLE) ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
  pub category: Option<String>,
  pub year:     Option<i64>,
}

impl From<&Record> for CategoryBreakdown {
  fn from(r: &Record) -> Self {
    Self {
      category: r.pestle.clone(),
      year:     r.start_year,
    }
  }
}

// ─── Geo insights ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoInsight {
  pub id:    Option<String>,
  pub value: Option<i64>,
}

impl From<&Record> for GeoInsight {
  fn from(r: &Record) -> Self {
    Self {
      id:    r.country.clone(),
      value: r.relevance,
    }
  }
}

// ─── Time-based trends ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeTrend {
  pub date:  Option<DateTime<Utc>>,
  pub value: Option<i64>,
}

impl From<&Record> for TimeTrend {
  fn from(r: &Record) -> Self {
    Self {
      date:  r.published,
      value: r.relevance,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
