//! # Meridian
//!
//! Stock indicator reports and news-sentiment/return correlation.
//!
//! The binary is a thin CLI over `pipeline`, which wires the workspace crates
//! together: `datasource` reads the tables, `indicators` and `sentiment` derive
//! series, `analytics` correlates them, and `report` presents the results.

pub mod pipeline;

pub use pipeline::{run_correlation, run_indicators, CorrelationRun};
