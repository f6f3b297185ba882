use crate::error::CoreError;
use crate::series::TimeSeries;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A raw daily price observation. Only the date is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<f64>,
}

impl PriceBar {
    /// A bar carrying only a closing price.
    pub fn from_close(date: NaiveDate, close: Option<f64>) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            adj_close: None,
            volume: None,
        }
    }
}

/// A timestamped news headline, before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEvent {
    /// Local wall-clock publication time.
    pub timestamp: NaiveDateTime,
    /// `None` when the source row had no usable headline.
    pub headline: Option<String>,
}

impl SentimentEvent {
    pub fn new(timestamp: NaiveDateTime, headline: impl Into<String>) -> Self {
        Self {
            timestamp,
            headline: Some(headline.into()),
        }
    }

    /// The calendar date the event falls on; time of day is discarded.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Builds the Close-price series from price bars in any order.
///
/// Two bars on the same date are rejected rather than merged.
pub fn close_series(bars: &[PriceBar]) -> Result<TimeSeries, CoreError> {
    let series = TimeSeries::from_unsorted(bars.iter().map(|bar| (bar.date, bar.close)))?;
    tracing::debug!(
        points = series.len(),
        defined = series.defined_count(),
        "Built close series from price bars"
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_series_sorts_bars() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let bars = vec![PriceBar::from_close(d2, Some(11.0)), PriceBar::from_close(d1, None)];

        let series = close_series(&bars).unwrap();
        assert_eq!(series.dates(), vec![d1, d2]);
        assert_eq!(series.values(), vec![None, Some(11.0)]);
    }

    #[test]
    fn test_close_series_rejects_duplicate_dates() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = vec![PriceBar::from_close(d1, Some(1.0)), PriceBar::from_close(d1, Some(2.0))];
        assert_eq!(close_series(&bars), Err(CoreError::DuplicateTimestamp(d1)));
    }

    #[test]
    fn test_event_date_drops_time_of_day() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let event = SentimentEvent::new(ts, "Stocks rally");
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
    }
}
