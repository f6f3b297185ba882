use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One date on which both the return and the sentiment are defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedObservation {
    pub date: NaiveDate,
    /// Daily return, in percent.
    pub returns: f64,
    /// Mean headline polarity for the date.
    pub sentiment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Significant,
    NotSignificant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
    None,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Significant => f.write_str("significant"),
            Significance::NotSignificant => f.write_str("not significant"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => f.write_str("positive"),
            Direction::Negative => f.write_str("negative"),
            Direction::None => f.write_str("no"),
        }
    }
}

/// The outcome of correlating daily returns with daily sentiment.
///
/// Built once by `CorrelationAnalyzer::analyze` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson's r, in [-1, 1].
    pub coefficient: f64,
    /// Two-tailed p-value, in [0, 1].
    pub p_value: f64,
    pub sample_size: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub strength: Strength,
    pub significance: Significance,
    pub direction: Direction,
}

impl CorrelationResult {
    pub fn is_significant(&self) -> bool {
        self.significance == Significance::Significant
    }

    /// A one-line reading such as "Weak positive correlation (not significant)".
    pub fn interpretation(&self) -> String {
        if self.direction == Direction::None {
            return format!("No correlation ({})", self.significance);
        }
        format!(
            "{} {} correlation ({})",
            self.strength, self.direction, self.significance
        )
    }
}

impl fmt::Display for CorrelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = {:.4}, p = {:.4}, n = {} ({} to {}): {}",
            self.coefficient,
            self.p_value,
            self.sample_size,
            self.start_date,
            self.end_date,
            self.interpretation()
        )
    }
}
