use crate::scorer::ScoredEvent;
use chrono::NaiveDate;
use core_types::TimeSeries;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean headline polarity per calendar date.
///
/// Only dates with at least one event appear; every value is defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySentimentSeries {
    series: TimeSeries,
    event_counts: Vec<usize>,
}

impl DailySentimentSeries {
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Number of events averaged into the value for `date`.
    pub fn event_count(&self, date: NaiveDate) -> Option<usize> {
        self.series
            .points()
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|index| self.event_counts[index])
    }

    pub fn total_events(&self) -> usize {
        self.event_counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn into_series(self) -> TimeSeries {
        self.series
    }
}

/// Reduces sub-day scored events to one sentiment value per date.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner;

impl Aligner {
    pub fn align(events: &[ScoredEvent]) -> DailySentimentSeries {
        let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for event in events {
            let entry = buckets.entry(event.timestamp.date()).or_insert((0.0, 0));
            entry.0 += event.polarity();
            entry.1 += 1;
        }

        let event_counts = buckets.values().map(|(_, count)| *count).collect();
        let means: BTreeMap<NaiveDate, Option<f64>> = buckets
            .into_iter()
            .map(|(date, (sum, count))| (date, Some(sum / count as f64)))
            .collect();

        let daily = DailySentimentSeries {
            series: TimeSeries::from(means),
            event_counts,
        };
        tracing::debug!(
            events = events.len(),
            days = daily.len(),
            "Aligned sentiment to calendar dates"
        );
        daily
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{ScoreOutcome, ScoringFailure};

    fn event(day: u32, hour: u32, outcome: ScoreOutcome) -> ScoredEvent {
        ScoredEvent {
            timestamp: NaiveDate::from_ymd_opt(2020, 6, day)
                .unwrap()
                .and_hms_opt(hour, 15, 0)
                .unwrap(),
            outcome,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 6, day).unwrap()
    }

    #[test]
    fn test_daily_mean_and_counts() {
        let events = vec![
            event(5, 16, ScoreOutcome::Scored(0.6)),
            event(3, 9, ScoreOutcome::Scored(-0.2)),
            event(5, 9, ScoreOutcome::Scored(0.2)),
            event(5, 23, ScoreOutcome::Neutral(ScoringFailure::BlankText)),
        ];
        let daily = Aligner::align(&events);

        assert_eq!(daily.series().dates(), vec![date(3), date(5)]);
        assert_eq!(daily.series().get(date(3)), Some(Some(-0.2)));
        let mean = daily.series().get(date(5)).flatten().unwrap();
        assert!((mean - 0.8 / 3.0).abs() < 1e-12);
        assert_eq!(daily.event_count(date(5)), Some(3));
        assert_eq!(daily.total_events(), 4);
    }

    #[test]
    fn test_never_fabricates_dates() {
        let events = vec![
            event(1, 10, ScoreOutcome::Scored(0.1)),
            event(9, 10, ScoreOutcome::Scored(0.3)),
        ];
        let daily = Aligner::align(&events);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily.series().get(date(4)), None);
        assert_eq!(daily.event_count(date(4)), None);
        assert_eq!(daily.series().defined_count(), 2);
    }

    #[test]
    fn test_no_events() {
        let daily = Aligner::align(&[]);
        assert!(daily.is_empty());
        assert_eq!(daily.total_events(), 0);
    }
}
