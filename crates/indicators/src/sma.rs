use crate::error::IndicatorError;
use crate::{Next, Reset};
use std::collections::VecDeque;

/// Arithmetic mean of the trailing `window` inputs.
///
/// Undefined until `window` inputs have been seen, and undefined whenever the
/// trailing window holds an undefined input. Gaps are not smoothed over.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    window: usize,
    buffer: VecDeque<Option<f64>>,
}

impl SimpleMovingAverage {
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameters(
                "SMA window must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            window,
            buffer: VecDeque::with_capacity(window),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Next<Option<f64>> for SimpleMovingAverage {
    type Output = Option<f64>;

    fn next(&mut self, input: Option<f64>) -> Option<f64> {
        if self.buffer.len() == self.window {
            self.buffer.pop_front();
        }
        self.buffer.push_back(input);

        if self.buffer.len() < self.window {
            return None;
        }

        // Recomputed from the buffer so no running sum drifts.
        let mut sum = 0.0;
        for value in &self.buffer {
            sum += (*value)?;
        }
        Some(sum / self.window as f64)
    }
}

impl Reset for SimpleMovingAverage {
    fn reset(&mut self) {
        self.buffer.clear();
    }
}
