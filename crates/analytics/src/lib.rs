//! # Meridian Analytics Engine
//!
//! This crate measures how daily stock returns move with daily news sentiment.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. It depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** The `CorrelationAnalyzer` holds only its thresholds.
//!   It takes two date-keyed series and produces a `CorrelationResult`, or an
//!   `AnalyticsError` when the overlap is too small to say anything.
//! - **Exact Rows:** `join` exposes the observations the coefficient was computed
//!   from, so a chart of the data always matches the reported numbers.
//!
//! ## Public API
//!
//! - `CorrelationAnalyzer`: inner join plus Pearson's r and its p-value.
//! - `CorrelationResult`, `Strength`, `Significance`, `Direction`: the classified outcome.
//! - `JoinedObservation`: one analyzed `(date, returns, sentiment)` row.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::CorrelationAnalyzer;
pub use error::AnalyticsError;
pub use report::{CorrelationResult, Direction, JoinedObservation, Significance, Strength};
