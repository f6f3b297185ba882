//! # Meridian Indicator Library
//!
//! Technical indicators over a daily Close-price `TimeSeries`: simple and
//! exponential moving averages, Wilder's RSI, and MACD with its signal line.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. It depends only on `core-types` and `configuration`.
//! - **Explicit Warm-up:** Every indicator consumes and produces `Option<f64>`.
//!   Values before an indicator has seen enough input are `None`, and an
//!   undefined input is never read as zero.
//! - **Streaming Core:** Each indicator is a small state machine implementing
//!   `Next`, so the recurrences run strictly in date order. The batch functions
//!   and `IndicatorEngine` are thin loops over those state machines.
//!
//! ## Public API
//!
//! - `Next`: the trait every streaming indicator implements.
//! - `SimpleMovingAverage`, `ExponentialMovingAverage`, `RelativeStrengthIndex`,
//!   `MovingAverageConvergenceDivergence`: the streaming indicators.
//! - `sma`, `ema`, `rsi`, `macd`: batch helpers over a `TimeSeries`.
//! - `IndicatorEngine` / `IndicatorReport`: the configured full report.

pub mod ema;
pub mod engine;
pub mod error;
pub mod macd;
pub mod report;
pub mod rsi;
pub mod sma;

pub use ema::ExponentialMovingAverage;
pub use engine::{ema, macd, rsi, sma, IndicatorEngine};
pub use error::IndicatorError;
pub use macd::{MacdOutput, MovingAverageConvergenceDivergence};
pub use report::{IndicatorReport, IndicatorRow, MacdSeries};
pub use rsi::{RelativeStrengthIndex, RsiZone};
pub use sma::SimpleMovingAverage;

/// Feeds one observation into a streaming indicator.
///
/// `&mut self` is needed because every indicator carries its running state
/// (trailing window, smoothed averages) from one call to the next. Inputs must
/// arrive in date order.
pub trait Next<T> {
    type Output;

    fn next(&mut self, input: T) -> Self::Output;
}

/// Returns a streaming indicator to its freshly constructed state.
pub trait Reset {
    fn reset(&mut self);
}
