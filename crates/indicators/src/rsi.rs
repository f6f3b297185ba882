use crate::error::IndicatorError;
use crate::{Next, Reset};
use serde::{Deserialize, Serialize};

/// Wilder's Relative Strength Index.
///
/// Average gain and loss start as the simple mean of the first `window` price
/// changes, then follow Wilder's smoothing
/// `avg = avg_prev * (window - 1) / window + x / window`.
/// The first value is produced once `window` changes have been seen, i.e. at the
/// `window + 1`-th defined price.
#[derive(Debug, Clone)]
pub struct RelativeStrengthIndex {
    window: usize,
    previous_price: Option<f64>,
    seed_gain: f64,
    seed_loss: f64,
    seed_count: usize,
    averages: Option<(f64, f64)>,
}

impl RelativeStrengthIndex {
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameters(
                "RSI window must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            window,
            previous_price: None,
            seed_gain: 0.0,
            seed_loss: 0.0,
            seed_count: 0,
            averages: None,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    fn value(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return 100.0;
        }
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

impl Next<Option<f64>> for RelativeStrengthIndex {
    type Output = Option<f64>;

    fn next(&mut self, input: Option<f64>) -> Option<f64> {
        let Some(price) = input else {
            self.reset();
            return None;
        };

        let Some(previous) = self.previous_price.replace(price) else {
            return None;
        };

        let delta = price - previous;
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        let window = self.window as f64;

        match self.averages {
            Some((avg_gain, avg_loss)) => {
                let avg_gain = avg_gain * (window - 1.0) / window + gain / window;
                let avg_loss = avg_loss * (window - 1.0) / window + loss / window;
                self.averages = Some((avg_gain, avg_loss));
            }
            None => {
                self.seed_gain += gain;
                self.seed_loss += loss;
                self.seed_count += 1;
                if self.seed_count == self.window {
                    self.averages = Some((self.seed_gain / window, self.seed_loss / window));
                }
            }
        }

        self.averages
            .map(|(avg_gain, avg_loss)| Self::value(avg_gain, avg_loss))
    }
}

impl Reset for RelativeStrengthIndex {
    fn reset(&mut self) {
        self.previous_price = None;
        self.seed_gain = 0.0;
        self.seed_loss = 0.0;
        self.seed_count = 0;
        self.averages = None;
    }
}

/// Where an RSI reading sits relative to the overbought/oversold bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Neutral,
    Oversold,
}

impl RsiZone {
    pub fn classify(rsi: f64, overbought: f64, oversold: f64) -> Self {
        if rsi >= overbought {
            RsiZone::Overbought
        } else if rsi <= oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

impl std::fmt::Display for RsiZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RsiZone::Overbought => "overbought",
            RsiZone::Neutral => "neutral",
            RsiZone::Oversold => "oversold",
        };
        f.write_str(label)
    }
}
