use crate::ema::ExponentialMovingAverage;
use crate::error::IndicatorError;
use crate::{Next, Reset};

/// One step of MACD output. Each line is undefined until its inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacdOutput {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Moving Average Convergence/Divergence.
///
/// The MACD line is `EMA(fast) - EMA(slow)` of price. The signal line is an EMA of
/// the MACD line, fed only once the MACD line is defined, so with the classic
/// 12/26/9 setup the line appears at index 25 and the signal at index 33.
#[derive(Debug, Clone)]
pub struct MovingAverageConvergenceDivergence {
    fast: ExponentialMovingAverage,
    slow: ExponentialMovingAverage,
    signal: ExponentialMovingAverage,
}

impl MovingAverageConvergenceDivergence {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        if fast >= slow {
            return Err(IndicatorError::InvalidParameters(format!(
                "MACD fast period ({fast}) must be less than slow period ({slow})"
            )));
        }
        Ok(Self {
            fast: ExponentialMovingAverage::new(fast)?,
            slow: ExponentialMovingAverage::new(slow)?,
            signal: ExponentialMovingAverage::new(signal)?,
        })
    }
}

impl Next<Option<f64>> for MovingAverageConvergenceDivergence {
    type Output = MacdOutput;

    fn next(&mut self, input: Option<f64>) -> MacdOutput {
        let fast = self.fast.next(input);
        let slow = self.slow.next(input);

        let macd = match (fast, slow) {
            (Some(fast), Some(slow)) => Some(fast - slow),
            _ => None,
        };

        let signal = match (macd, input) {
            (Some(_), _) => self.signal.next(macd),
            // A price gap breaks the MACD line, so the signal starts over with it.
            (None, None) => {
                self.signal.reset();
                None
            }
            (None, Some(_)) => None,
        };

        let histogram = match (macd, signal) {
            (Some(macd), Some(signal)) => Some(macd - signal),
            _ => None,
        };

        MacdOutput {
            macd,
            signal,
            histogram,
        }
    }
}

impl Reset for MovingAverageConvergenceDivergence {
    fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.signal.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_periods() {
        assert!(MovingAverageConvergenceDivergence::new(26, 12, 9).is_err());
        assert!(MovingAverageConvergenceDivergence::new(12, 12, 9).is_err());
        assert!(MovingAverageConvergenceDivergence::new(12, 26, 0).is_err());
    }

    #[test]
    fn test_warm_up_lengths() {
        let mut macd = MovingAverageConvergenceDivergence::new(12, 26, 9).unwrap();
        let out: Vec<MacdOutput> = (0..40)
            .map(|i| macd.next(Some(100.0 + i as f64)))
            .collect();

        assert!(out[24].macd.is_none());
        assert!(out[25].macd.is_some());
        assert!(out[32].signal.is_none());
        assert!(out[33].signal.is_some());
        assert!(out[33].histogram.is_some());
    }

    #[test]
    fn test_small_periods_by_hand() {
        let mut macd = MovingAverageConvergenceDivergence::new(1, 2, 1).unwrap();
        let first = macd.next(Some(2.0));
        assert_eq!(first, MacdOutput::default());

        // fast = 4, slow = mean(2, 4) = 3
        let second = macd.next(Some(4.0));
        assert_eq!(second.macd, Some(1.0));
        assert_eq!(second.signal, Some(1.0));
        assert_eq!(second.histogram, Some(0.0));
    }
}
