use crate::error::AnalyticsError;
use crate::report::{CorrelationResult, Direction, JoinedObservation, Significance, Strength};
use configuration::CorrelationParams;
use core_types::TimeSeries;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// A stateless calculator for the return/sentiment correlation.
#[derive(Debug, Clone)]
pub struct CorrelationAnalyzer {
    params: CorrelationParams,
}

impl Default for CorrelationAnalyzer {
    fn default() -> Self {
        Self::new(CorrelationParams::default())
    }
}

impl CorrelationAnalyzer {
    pub fn new(params: CorrelationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CorrelationParams {
        &self.params
    }

    /// Inner-joins the two series on date and keeps rows where both values are defined.
    pub fn join(&self, returns: &TimeSeries, sentiment: &TimeSeries) -> Vec<JoinedObservation> {
        // Both inputs are date-ordered, so a merge walk is enough.
        let (left, right) = (returns.points(), sentiment.points());
        let (mut i, mut j) = (0, 0);
        let mut joined = Vec::new();

        while i < left.len() && j < right.len() {
            let (a, b) = (&left[i], &right[j]);
            if a.date < b.date {
                i += 1;
            } else if a.date > b.date {
                j += 1;
            } else {
                if let (Some(returns), Some(sentiment)) = (a.value, b.value) {
                    joined.push(JoinedObservation {
                        date: a.date,
                        returns,
                        sentiment,
                    });
                }
                i += 1;
                j += 1;
            }
        }

        tracing::debug!(
            returns = returns.len(),
            sentiment = sentiment.len(),
            joined = joined.len(),
            "Joined returns with daily sentiment"
        );
        joined
    }

    /// Joins the series and computes Pearson's r with its two-tailed p-value.
    pub fn analyze(
        &self,
        returns: &TimeSeries,
        sentiment: &TimeSeries,
    ) -> Result<CorrelationResult, AnalyticsError> {
        let joined = self.join(returns, sentiment);
        self.analyze_joined(&joined)
    }

    /// Computes the correlation over already-joined rows.
    pub fn analyze_joined(
        &self,
        joined: &[JoinedObservation],
    ) -> Result<CorrelationResult, AnalyticsError> {
        let (first, last) = match (joined.first(), joined.last()) {
            (Some(first), Some(last)) if joined.len() >= 2 => (first, last),
            _ => {
                tracing::warn!(found = joined.len(), "Too few overlapping dates to correlate");
                return Err(AnalyticsError::InsufficientData {
                    found: joined.len(),
                });
            }
        };

        let returns: Vec<f64> = joined.iter().map(|o| o.returns).collect();
        let sentiment: Vec<f64> = joined.iter().map(|o| o.sentiment).collect();

        let coefficient = pearson(&returns, &sentiment)?;
        let p_value = p_value(coefficient, joined.len())?;

        let result = CorrelationResult {
            coefficient,
            p_value,
            sample_size: joined.len(),
            start_date: first.date,
            end_date: last.date,
            strength: self.strength(coefficient),
            significance: self.significance(p_value),
            direction: direction(coefficient),
        };

        tracing::info!(
            r = result.coefficient,
            p = result.p_value,
            n = result.sample_size,
            "Correlation computed"
        );
        Ok(result)
    }

    fn strength(&self, r: f64) -> Strength {
        let magnitude = r.abs();
        if magnitude > self.params.strong_threshold {
            Strength::Strong
        } else if magnitude > self.params.moderate_threshold {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    fn significance(&self, p: f64) -> Significance {
        if p < self.params.significance_level {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }
}

fn direction(r: f64) -> Direction {
    if r > 0.0 {
        Direction::Positive
    } else if r < 0.0 {
        Direction::Negative
    } else {
        Direction::None
    }
}

/// Pearson's r for two equal-length samples.
fn pearson(x: &[f64], y: &[f64]) -> Result<f64, AnalyticsError> {
    if !x.iter().all(|v| v.is_finite()) {
        return Err(AnalyticsError::NonFinite("returns series"));
    }
    if !y.iter().all(|v| v.is_finite()) {
        return Err(AnalyticsError::NonFinite("sentiment series"));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 {
        return Err(AnalyticsError::ZeroVariance("returns"));
    }
    if var_y == 0.0 {
        return Err(AnalyticsError::ZeroVariance("sentiment"));
    }

    // Finite inputs can still overflow the sums.
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    if !r.is_finite() {
        return Err(AnalyticsError::NonFinite("correlation coefficient"));
    }
    Ok(r.clamp(-1.0, 1.0))
}

/// Two-tailed p-value of `r` under the null of no correlation, using
/// Student's t with `n - 2` degrees of freedom.
fn p_value(r: f64, n: usize) -> Result<f64, AnalyticsError> {
    if !r.is_finite() {
        return Err(AnalyticsError::NonFinite("correlation coefficient"));
    }
    if n <= 2 {
        // Two points always lie on a line; the test has no degrees of freedom.
        return Ok(1.0);
    }
    let one_minus_r2 = 1.0 - r * r;
    if one_minus_r2 <= 0.0 {
        return Ok(0.0);
    }

    let df = (n - 2) as f64;
    let t = r * (df / one_minus_r2).sqrt();
    if !t.is_finite() {
        return Err(AnalyticsError::NonFinite("t statistic"));
    }
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| AnalyticsError::Distribution(e.to_string()))?;
    // The survival function keeps precision in the far tail where `1 - cdf` rounds to zero.
    let p = 2.0 * dist.sf(t.abs());
    Ok(p.clamp(0.0, 1.0))
}
