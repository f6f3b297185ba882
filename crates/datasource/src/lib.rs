//! # Meridian Data Source Crate
//!
//! Reads the two input tables, daily prices and timestamped news headlines, into
//! `core-types` structs.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All file-format knowledge lives here. The rest of the workspace
//!   sees `PriceBar`s and `SentimentEvent`s, never CSV records.
//! - **Fail Early:** An input that cannot be opened or read yields
//!   `DataSourceError::InputUnavailable` before any analysis starts. Empty or
//!   unreadable numeric cells are not failures; they load as `None`.
//!
//! ## Public API
//!
//! - `load_prices`, `load_news`: the table loaders.
//! - `parse_timestamp`, `parse_date`: the shared date parsing rules.
//! - `DataSourceError`: The specific error types that can be returned from this crate.

pub mod error;
pub mod loader;
pub mod timestamp;

pub use error::DataSourceError;
pub use loader::{load_news, load_prices};
pub use timestamp::{parse_date, parse_timestamp};
