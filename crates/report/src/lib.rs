//! # Meridian Report Crate
//!
//! The output side of the pipeline: console tables and chart-ready exports.
//!
//! ## Architectural Principles
//!
//! - **Presentation Only:** Takes finished `IndicatorReport`s, joined
//!   observations, and `CorrelationResult`s. It never computes or alters a value.
//! - **Explicit Configuration:** Everything that shapes the output (directory,
//!   overlay scale, headline preview length, table size) comes from the
//!   `RenderConfig` it is constructed with.
//!
//! ## Public API
//!
//! - `ChartExporter`: writes `indicators.csv`, `returns_vs_sentiment.csv`, and
//!   `correlation.json`, creating the output directory on demand.
//! - `indicator_table`, `correlation_table`: `comfy_table::Table` summaries.
//! - `ReportError`: The specific error types that can be returned from this crate.

pub mod console;
pub mod error;
pub mod export;

pub use console::{correlation_table, indicator_table};
pub use error::ReportError;
pub use export::{ChartExporter, CORRELATION_FILE, INDICATORS_FILE, RETURNS_VS_SENTIMENT_FILE};
