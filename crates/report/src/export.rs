use crate::error::ReportError;
use analytics::{CorrelationResult, JoinedObservation};
use chrono::NaiveDate;
use configuration::RenderConfig;
use core_types::SentimentEvent;
use indicators::IndicatorReport;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const INDICATORS_FILE: &str = "indicators.csv";
pub const RETURNS_VS_SENTIMENT_FILE: &str = "returns_vs_sentiment.csv";
pub const CORRELATION_FILE: &str = "correlation.json";

/// One row of the returns-versus-sentiment overlay.
#[derive(Debug, Serialize)]
struct OverlayRow {
    date: NaiveDate,
    returns: f64,
    sentiment: f64,
    sentiment_scaled: f64,
    headline: Option<String>,
}

/// Writes chart-ready series and the correlation result under `RenderConfig::output_dir`.
///
/// The exporter only formats what it is given; every value it writes was
/// computed upstream.
#[derive(Debug, Clone)]
pub struct ChartExporter {
    config: RenderConfig,
}

impl ChartExporter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf, ReportError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(dir.join(file_name))
    }

    fn create(path: &Path) -> Result<File, ReportError> {
        File::create(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Close, every SMA, RSI with its zone, and the MACD lines, one row per date.
    /// Undefined values are written as empty cells.
    pub fn write_indicators(&self, report: &IndicatorReport) -> Result<PathBuf, ReportError> {
        let path = self.prepare(INDICATORS_FILE)?;
        let mut writer = csv::Writer::from_writer(Self::create(&path)?);

        let mut header = vec!["date".to_string(), "close".to_string()];
        header.extend(report.smas.iter().map(|(window, _)| format!("sma_{window}")));
        header.extend(
            ["rsi", "rsi_zone", "macd", "macd_signal", "macd_histogram"].map(String::from),
        );
        writer.write_record(&header)?;

        let cell = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        for row in report.rows() {
            let mut record = vec![row.date.to_string(), cell(row.close)];
            record.extend(row.smas.iter().map(|value| cell(*value)));
            record.push(cell(row.rsi));
            record.push(row.zone.map(|zone| zone.to_string()).unwrap_or_default());
            record.push(cell(row.macd));
            record.push(cell(row.signal));
            record.push(cell(row.histogram));
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), rows = report.close.len(), "Wrote indicator series");
        Ok(path)
    }

    /// The analyzed rows with sentiment scaled for overlay on percent returns,
    /// each annotated with a shortened headline from that date when one exists.
    pub fn write_returns_vs_sentiment(
        &self,
        joined: &[JoinedObservation],
        events: &[SentimentEvent],
    ) -> Result<PathBuf, ReportError> {
        let path = self.prepare(RETURNS_VS_SENTIMENT_FILE)?;
        let mut writer = csv::Writer::from_writer(Self::create(&path)?);

        let previews = self.headline_previews(events);
        for row in joined {
            writer.serialize(OverlayRow {
                date: row.date,
                returns: row.returns,
                sentiment: row.sentiment,
                sentiment_scaled: row.sentiment * self.config.sentiment_scale,
                headline: previews.get(&row.date).cloned(),
            })?;
        }
        writer.flush().map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), rows = joined.len(), "Wrote returns vs sentiment overlay");
        Ok(path)
    }

    pub fn write_correlation(&self, result: &CorrelationResult) -> Result<PathBuf, ReportError> {
        let path = self.prepare(CORRELATION_FILE)?;
        serde_json::to_writer_pretty(Self::create(&path)?, result)?;
        tracing::info!(path = %path.display(), "Wrote correlation result");
        Ok(path)
    }

    /// The first usable headline of each date, cut to the configured preview length.
    fn headline_previews(&self, events: &[SentimentEvent]) -> BTreeMap<NaiveDate, String> {
        let mut previews = BTreeMap::new();
        for event in events {
            let Some(headline) = event.headline.as_deref().map(str::trim) else {
                continue;
            };
            if headline.is_empty() {
                continue;
            }
            previews
                .entry(event.date())
                .or_insert_with(|| preview(headline, self.config.headline_preview_chars));
        }
        previews
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::CorrelationAnalyzer;
    use configuration::IndicatorParams;
    use core_types::TimeSeries;
    use indicators::{IndicatorEngine, MacdSeries};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 6, day).unwrap()
    }

    fn exporter(dir: &Path) -> ChartExporter {
        ChartExporter::new(RenderConfig {
            output_dir: dir.join("nested").join("plots"),
            ..RenderConfig::default()
        })
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("Apple beats estimates", 10), "Apple beat...");
        assert_eq!(preview("Société Générale", 7), "Société...");
    }

    #[test]
    fn test_write_indicators_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let close = TimeSeries::from_sorted(
            (1..=30).map(|d| (date(d), Some(100.0 + d as f64))),
        )
        .unwrap();
        let params = IndicatorParams {
            sma_windows: vec![5],
            ..IndicatorParams::default()
        };
        let report = IndicatorEngine::new(params).unwrap().compute(&close);

        let path = exporter(tmp.path()).write_indicators(&report).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("date,close,sma_5,rsi,rsi_zone,macd,macd_signal,macd_histogram")
        );
        assert_eq!(lines.next(), Some("2020-06-01,101,,,,,,"));
        assert_eq!(contents.lines().count(), 31);
        assert!(contents.lines().last().unwrap().contains("overbought"));
    }

    #[test]
    fn test_write_indicators_with_short_series() {
        let tmp = tempfile::tempdir().unwrap();
        let close = TimeSeries::from_sorted((1..=3).map(|d| (date(d), Some(d as f64)))).unwrap();
        let report = IndicatorReport {
            close,
            smas: vec![(2, TimeSeries::from_sorted([(date(2), Some(1.5))]).unwrap())],
            rsi_period: 14,
            rsi: TimeSeries::default(),
            macd: MacdSeries {
                macd: TimeSeries::default(),
                signal: TimeSeries::default(),
                histogram: TimeSeries::default(),
            },
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        };

        let path = exporter(tmp.path()).write_indicators(&report).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "2020-06-01,1,,,,,,");
        assert_eq!(lines[2], "2020-06-02,2,1.5,,,,,");
    }

    #[test]
    fn test_write_overlay_and_correlation() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter(tmp.path());

        let joined = vec![
            JoinedObservation { date: date(1), returns: 1.5, sentiment: 0.2 },
            JoinedObservation { date: date(2), returns: -0.5, sentiment: -0.1 },
            JoinedObservation { date: date(3), returns: 0.7, sentiment: 0.05 },
        ];
        let events = vec![
            SentimentEvent::new(date(1).and_hms_opt(9, 0, 0).unwrap(), "Stocks That Hit Highs"),
            SentimentEvent::new(date(1).and_hms_opt(12, 0, 0).unwrap(), "Later story"),
            SentimentEvent {
                timestamp: date(2).and_hms_opt(9, 0, 0).unwrap(),
                headline: None,
            },
        ];

        let path = exporter.write_returns_vs_sentiment(&joined, &events).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "date,returns,sentiment,sentiment_scaled,headline");
        assert_eq!(lines[1], "2020-06-01,1.5,0.2,2.0,Stocks Tha...");
        assert!(lines[2].starts_with("2020-06-02,-0.5,-0.1,-1.0,"));
        assert!(lines[2].ends_with(','));

        let result = CorrelationAnalyzer::default().analyze_joined(&joined).unwrap();
        let path = exporter.write_correlation(&result).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["sample_size"], 3);
        assert_eq!(json["start_date"], "2020-06-01");
        assert_eq!(json["direction"], "positive");
    }
}
