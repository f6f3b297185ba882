use crate::error::DataSourceError;
use crate::timestamp::{parse_date, parse_timestamp};
use core_types::{PriceBar, SentimentEvent};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One row of a daily price export. Numeric cells that are empty, unreadable,
/// or not finite become `None`.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open", default, deserialize_with = "csv::invalid_option")]
    open: Option<f64>,
    #[serde(rename = "High", default, deserialize_with = "csv::invalid_option")]
    high: Option<f64>,
    #[serde(rename = "Low", default, deserialize_with = "csv::invalid_option")]
    low: Option<f64>,
    #[serde(rename = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(rename = "Adj Close", default, deserialize_with = "csv::invalid_option")]
    adj_close: Option<f64>,
    #[serde(rename = "Volume", default, deserialize_with = "csv::invalid_option")]
    volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NewsRow {
    date: String,
    #[serde(default)]
    headline: Option<String>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn open_reader(path: &Path) -> Result<csv::Reader<BufReader<File>>, DataSourceError> {
    let file = File::open(path).map_err(|e| DataSourceError::unavailable(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}

fn require_columns(
    reader: &mut csv::Reader<BufReader<File>>,
    path: &Path,
    required: &[&str],
) -> Result<(), DataSourceError> {
    let headers = reader
        .headers()
        .map_err(|e| DataSourceError::unavailable(path, e))?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataSourceError::unavailable(
                path,
                format!("missing required column '{column}'"),
            ));
        }
    }
    Ok(())
}

/// Reads a daily price table with at least `Date` and `Close` columns.
///
/// Rows come back in file order. A date with a time component is reduced to its
/// calendar date. A row whose date cannot be read makes the whole input unavailable.
pub fn load_prices(path: &Path) -> Result<Vec<PriceBar>, DataSourceError> {
    let mut reader = open_reader(path)?;
    require_columns(&mut reader, path, &["Date", "Close"])?;

    let mut bars = Vec::new();
    for (index, result) in reader.deserialize::<PriceRow>().enumerate() {
        // Line 1 is the header.
        let line = index + 2;
        let row = result.map_err(|e| DataSourceError::unavailable(path, e))?;
        let date = parse_date(&row.date).ok_or_else(|| {
            DataSourceError::unavailable(path, format!("line {line}: invalid date '{}'", row.date))
        })?;
        bars.push(PriceBar {
            date,
            open: finite(row.open),
            high: finite(row.high),
            low: finite(row.low),
            close: finite(row.close),
            adj_close: finite(row.adj_close),
            volume: finite(row.volume),
        });
    }

    let missing_close = bars.iter().filter(|bar| bar.close.is_none()).count();
    if missing_close > 0 {
        tracing::warn!(rows = missing_close, "Price rows without a usable Close value");
    }
    tracing::info!(path = %path.display(), rows = bars.len(), "Loaded price table");
    Ok(bars)
}

/// Reads a news table with `date` and `headline` columns.
///
/// An empty headline cell is kept as an event with no text; the scorer decides
/// what it is worth.
pub fn load_news(path: &Path) -> Result<Vec<SentimentEvent>, DataSourceError> {
    let mut reader = open_reader(path)?;
    require_columns(&mut reader, path, &["date", "headline"])?;

    let mut events = Vec::new();
    for (index, result) in reader.deserialize::<NewsRow>().enumerate() {
        let line = index + 2;
        let row = result.map_err(|e| DataSourceError::unavailable(path, e))?;
        let timestamp = parse_timestamp(&row.date).ok_or_else(|| {
            DataSourceError::unavailable(
                path,
                format!("line {line}: invalid timestamp '{}'", row.date),
            )
        })?;
        events.push(SentimentEvent {
            timestamp,
            headline: row.headline,
        });
    }

    tracing::info!(path = %path.display(), events = events.len(), "Loaded news table");
    Ok(events)
}
