//! # Meridian Core Types
//!
//! The shared vocabulary of the workspace. Every other crate speaks in terms of
//! the `TimeSeries` defined here, so this crate has no knowledge of indicators,
//! sentiment, or statistics.
//!
//! ## Public API
//!
//! - `TimeSeries`: a strictly date-ordered sequence of optional values.
//! - `PriceBar`, `SentimentEvent`: the raw observations produced by loaders.
//! - `close_series`: builds the Close-price series from price bars.
//! - `CoreError`: ordering and duplicate-date violations.

pub mod error;
pub mod series;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use series::{Observation, TimeSeries};
pub use structs::{close_series, PriceBar, SentimentEvent};
