//! Core types and trait definitions for the Vantage record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod projection;
pub mod record;
pub mod store;

pub use record::{NewRecord, Record};
