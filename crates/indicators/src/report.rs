use crate::rsi::RsiZone;
use chrono::NaiveDate;
use core_types::TimeSeries;
use serde::Serialize;

/// The three MACD lines, each on the dates of the source price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdSeries {
    pub macd: TimeSeries,
    pub signal: TimeSeries,
    pub histogram: TimeSeries,
}

/// Every configured indicator for one price history.
///
/// All series share the dates of `close`, which is the forward-filled input the
/// indicators were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub close: TimeSeries,
    /// One `(window, series)` pair per configured SMA window, in configuration order.
    pub smas: Vec<(usize, TimeSeries)>,
    pub rsi_period: usize,
    pub rsi: TimeSeries,
    pub macd: MacdSeries,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

/// Every indicator value for one date of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: Option<f64>,
    /// In the same order as `IndicatorReport::smas`.
    pub smas: Vec<Option<f64>>,
    pub rsi: Option<f64>,
    pub zone: Option<RsiZone>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// The value of `series` on `date`, expected at `index`.
///
/// A series that does not line up with the close dates is searched by date, and
/// a date it lacks reads as undefined.
fn value_at(series: &TimeSeries, index: usize, date: NaiveDate) -> Option<f64> {
    match series.points().get(index) {
        Some(point) if point.date == date => point.value,
        _ => series.get(date).flatten(),
    }
}

impl IndicatorReport {
    /// One row per date of `close`, in date order.
    pub fn rows(&self) -> impl Iterator<Item = IndicatorRow> + '_ {
        self.close.iter().enumerate().map(move |(i, point)| {
            let rsi = value_at(&self.rsi, i, point.date);
            IndicatorRow {
                date: point.date,
                close: point.value,
                smas: self
                    .smas
                    .iter()
                    .map(|(_, series)| value_at(series, i, point.date))
                    .collect(),
                rsi,
                zone: rsi.map(|v| RsiZone::classify(v, self.rsi_overbought, self.rsi_oversold)),
                macd: value_at(&self.macd.macd, i, point.date),
                signal: value_at(&self.macd.signal, i, point.date),
                histogram: value_at(&self.macd.histogram, i, point.date),
            }
        })
    }

    pub fn sma(&self, window: usize) -> Option<&TimeSeries> {
        self.smas
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, series)| series)
    }

    /// The zone of the most recent defined RSI reading.
    pub fn latest_rsi_zone(&self) -> Option<RsiZone> {
        self.rsi
            .defined()
            .last()
            .map(|(_, rsi)| RsiZone::classify(rsi, self.rsi_overbought, self.rsi_oversold))
    }

    /// Counts of defined RSI readings per zone, as `(overbought, neutral, oversold)`.
    pub fn rsi_zone_counts(&self) -> (usize, usize, usize) {
        self.rsi.defined().fold((0, 0, 0), |(ob, n, os), (_, rsi)| {
            match RsiZone::classify(rsi, self.rsi_overbought, self.rsi_oversold) {
                RsiZone::Overbought => (ob + 1, n, os),
                RsiZone::Neutral => (ob, n + 1, os),
                RsiZone::Oversold => (ob, n, os + 1),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 5, d).unwrap()
    }

    fn series(points: &[(u32, f64)]) -> TimeSeries {
        TimeSeries::from_sorted(points.iter().map(|(d, v)| (day(*d), Some(*v)))).unwrap()
    }

    #[test]
    fn test_rows_tolerate_misaligned_series() {
        let report = IndicatorReport {
            close: series(&[(1, 10.0), (2, 11.0), (3, 12.0), (4, 13.0)]),
            smas: vec![(2, series(&[(2, 10.5)])), (3, TimeSeries::default())],
            rsi_period: 14,
            rsi: series(&[(3, 75.0), (4, 20.0)]),
            macd: MacdSeries {
                macd: series(&[(1, 0.1), (2, 0.2)]),
                signal: TimeSeries::default(),
                histogram: series(&[(4, -0.3)]),
            },
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        };

        let rows: Vec<IndicatorRow> = report.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].smas, vec![None, None]);
        assert_eq!(rows[1].smas, vec![Some(10.5), None]);
        assert_eq!(rows[0].macd, Some(0.1));
        assert_eq!(rows[2].rsi, Some(75.0));
        assert_eq!(rows[2].zone, Some(RsiZone::Overbought));
        assert_eq!(rows[3].zone, Some(RsiZone::Oversold));
        assert_eq!(rows[3].histogram, Some(-0.3));
        assert!(rows.iter().all(|row| row.signal.is_none()));
        assert_eq!(rows[1].rsi, None);
        assert_eq!(rows[1].zone, None);
    }
}
