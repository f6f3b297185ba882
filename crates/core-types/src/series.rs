use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single point of a `TimeSeries`.
///
/// `value` is `None` when the observation is undefined (missing input, an
/// indicator still warming up, a return without a prior price). It is never
/// replaced by zero, and a defined value is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl Observation {
    /// NaN and infinities are stored as undefined.
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self {
            date,
            value: value.filter(|v| v.is_finite()),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

/// A date-keyed sequence of optional values.
///
/// Dates are strictly increasing, so there is at most one value per date.
/// Spacing between dates is arbitrary (trading days, sparse sentiment days).
/// A series is immutable once built; every transform returns a new series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<Observation>,
}

impl TimeSeries {
    /// Builds a series from points that must already be in strictly increasing date order.
    pub fn from_sorted<I>(points: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (NaiveDate, Option<f64>)>,
    {
        let points: Vec<Observation> = points
            .into_iter()
            .map(|(date, value)| Observation::new(date, value))
            .collect();

        for pair in points.windows(2) {
            let (previous, next) = (pair[0].date, pair[1].date);
            if previous == next {
                return Err(CoreError::DuplicateTimestamp(next));
            }
            if previous > next {
                return Err(CoreError::OutOfOrder { previous, next });
            }
        }

        Ok(Self { points })
    }

    /// Builds a series from points in any order. Duplicate dates are a caller error.
    pub fn from_unsorted<I>(points: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (NaiveDate, Option<f64>)>,
    {
        let mut points: Vec<(NaiveDate, Option<f64>)> = points.into_iter().collect();
        // Stable sort, so the duplicate check below sees equal dates side by side.
        points.sort_by_key(|(date, _)| *date);
        Self::from_sorted(points)
    }

    /// Builds a series whose dates are those of `self`, with values produced by `values`.
    ///
    /// Used by transforms that emit exactly one output per input point.
    pub fn with_values<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let points = self
            .points
            .iter()
            .zip(values)
            .map(|(point, value)| Observation::new(point.date, value))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.points.iter()
    }

    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Iterates over the points whose value is defined.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|value| (p.date, value)))
    }

    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_defined()).count()
    }

    /// Looks up the value stored for `date`.
    ///
    /// The outer `Option` is `None` when the date has no entry at all; the inner one
    /// is `None` when the entry exists but is undefined.
    pub fn get(&self, date: NaiveDate) -> Option<Option<f64>> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|index| self.points[index].value)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Replaces each undefined value with the nearest preceding defined value.
    ///
    /// Undefined values before the first defined one stay undefined.
    pub fn forward_fill(&self) -> Self {
        let mut last_seen: Option<f64> = None;
        let filled: Vec<Option<f64>> = self
            .points
            .iter()
            .map(|p| {
                if p.value.is_some() {
                    last_seen = p.value;
                }
                last_seen
            })
            .collect();
        self.with_values(filled)
    }

    /// Percentage change from the previous point, scaled to percent.
    ///
    /// The first point is always undefined. A point is also undefined when either
    /// price is undefined or the previous price is zero.
    pub fn pct_change(&self) -> Self {
        let mut changes = Vec::with_capacity(self.points.len());
        changes.push(None);
        for pair in self.points.windows(2) {
            let change = match (pair[0].value, pair[1].value) {
                (Some(previous), Some(current)) if previous != 0.0 => {
                    Some((current / previous - 1.0) * 100.0)
                }
                _ => None,
            };
            changes.push(change);
        }
        changes.truncate(self.points.len());
        self.with_values(changes)
    }
}

/// A map's keys are already unique and ordered, so this conversion cannot fail.
impl From<BTreeMap<NaiveDate, Option<f64>>> for TimeSeries {
    fn from(map: BTreeMap<NaiveDate, Option<f64>>) -> Self {
        let points = map
            .into_iter()
            .map(|(date, value)| Observation::new(date, value))
            .collect();
        Self { points }
    }
}
