use crate::error::IndicatorError;
use crate::{Next, Reset};

/// Exponential moving average with smoothing factor `k = 2 / (span + 1)`.
///
/// The first output is the simple mean of the first `span` inputs; after that
/// `ema = price * k + ema_prev * (1 - k)`. An undefined input yields `None` and
/// restarts the warm-up.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    span: usize,
    k: f64,
    seed_sum: f64,
    seed_count: usize,
    current: Option<f64>,
}

impl ExponentialMovingAverage {
    pub fn new(span: usize) -> Result<Self, IndicatorError> {
        if span == 0 {
            return Err(IndicatorError::InvalidParameters(
                "EMA span must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            span,
            k: 2.0 / (span as f64 + 1.0),
            seed_sum: 0.0,
            seed_count: 0,
            current: None,
        })
    }

    pub fn span(&self) -> usize {
        self.span
    }
}

impl Next<Option<f64>> for ExponentialMovingAverage {
    type Output = Option<f64>;

    fn next(&mut self, input: Option<f64>) -> Option<f64> {
        let Some(price) = input else {
            self.reset();
            return None;
        };

        match self.current {
            Some(previous) => {
                self.current = Some(price * self.k + previous * (1.0 - self.k));
            }
            None => {
                self.seed_sum += price;
                self.seed_count += 1;
                if self.seed_count == self.span {
                    self.current = Some(self.seed_sum / self.span as f64);
                }
            }
        }
        self.current
    }
}

impl Reset for ExponentialMovingAverage {
    fn reset(&mut self) {
        self.seed_sum = 0.0;
        self.seed_count = 0;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_by_simple_mean() {
        let mut ema = ExponentialMovingAverage::new(3).unwrap();
        assert_eq!(ema.next(Some(1.0)), None);
        assert_eq!(ema.next(Some(2.0)), None);
        assert_eq!(ema.next(Some(3.0)), Some(2.0));
        // k = 0.5
        assert_eq!(ema.next(Some(6.0)), Some(4.0));
    }

    #[test]
    fn test_gap_restarts_warm_up() {
        let mut ema = ExponentialMovingAverage::new(2).unwrap();
        ema.next(Some(1.0));
        assert_eq!(ema.next(Some(3.0)), Some(2.0));
        assert_eq!(ema.next(None), None);
        assert_eq!(ema.next(Some(10.0)), None);
        assert_eq!(ema.next(Some(20.0)), Some(15.0));
    }

    #[test]
    fn test_span_one_tracks_input() {
        let mut ema = ExponentialMovingAverage::new(1).unwrap();
        assert_eq!(ema.next(Some(5.0)), Some(5.0));
        assert_eq!(ema.next(Some(8.0)), Some(8.0));
    }
}
