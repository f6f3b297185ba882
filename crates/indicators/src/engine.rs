use crate::ema::ExponentialMovingAverage;
use crate::error::IndicatorError;
use crate::macd::MovingAverageConvergenceDivergence;
use crate::report::{IndicatorReport, MacdSeries};
use crate::rsi::RelativeStrengthIndex;
use crate::sma::SimpleMovingAverage;
use crate::Next;
use configuration::IndicatorParams;
use core_types::TimeSeries;

/// Runs a streaming indicator over `series`, in date order.
fn run<I>(series: &TimeSeries, mut indicator: I) -> TimeSeries
where
    I: Next<Option<f64>, Output = Option<f64>>,
{
    let values: Vec<Option<f64>> = series.iter().map(|p| indicator.next(p.value)).collect();
    series.with_values(values)
}

/// Simple moving average of `series` over `window` points.
pub fn sma(series: &TimeSeries, window: usize) -> Result<TimeSeries, IndicatorError> {
    Ok(run(series, SimpleMovingAverage::new(window)?))
}

/// Exponential moving average of `series` with the given span.
pub fn ema(series: &TimeSeries, span: usize) -> Result<TimeSeries, IndicatorError> {
    Ok(run(series, ExponentialMovingAverage::new(span)?))
}

/// Wilder's RSI of `series` over `window` price changes.
pub fn rsi(series: &TimeSeries, window: usize) -> Result<TimeSeries, IndicatorError> {
    Ok(run(series, RelativeStrengthIndex::new(window)?))
}

/// MACD line, signal line, and histogram of `series`.
pub fn macd(
    series: &TimeSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries, IndicatorError> {
    Ok(run_macd(
        series,
        MovingAverageConvergenceDivergence::new(fast, slow, signal)?,
    ))
}

fn run_macd(series: &TimeSeries, mut indicator: MovingAverageConvergenceDivergence) -> MacdSeries {
    let capacity = series.len();
    let mut macd_line = Vec::with_capacity(capacity);
    let mut signal_line = Vec::with_capacity(capacity);
    let mut histogram = Vec::with_capacity(capacity);

    for point in series.iter() {
        let out = indicator.next(point.value);
        macd_line.push(out.macd);
        signal_line.push(out.signal);
        histogram.push(out.histogram);
    }

    MacdSeries {
        macd: series.with_values(macd_line),
        signal: series.with_values(signal_line),
        histogram: series.with_values(histogram),
    }
}

/// A stateless calculator that turns a Close-price series into an `IndicatorReport`.
///
/// The indicators are built once at construction, which is where bad parameters
/// are rejected. Each report runs fresh copies of them, so computing never fails.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    params: IndicatorParams,
    smas: Vec<(usize, SimpleMovingAverage)>,
    rsi: RelativeStrengthIndex,
    macd: MovingAverageConvergenceDivergence,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Result<Self, IndicatorError> {
        let smas = params
            .sma_windows
            .iter()
            .map(|window| Ok((*window, SimpleMovingAverage::new(*window)?)))
            .collect::<Result<Vec<_>, IndicatorError>>()?;
        let rsi = RelativeStrengthIndex::new(params.rsi_period)?;
        let macd = MovingAverageConvergenceDivergence::new(
            params.macd_fast,
            params.macd_slow,
            params.macd_signal,
        )?;
        if params.rsi_oversold >= params.rsi_overbought {
            return Err(IndicatorError::InvalidParameters(
                "RSI oversold threshold must be below the overbought threshold".to_string(),
            ));
        }
        Ok(Self {
            params,
            smas,
            rsi,
            macd,
        })
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Forward-fills the close series once, then computes every configured indicator on it.
    pub fn compute(&self, close: &TimeSeries) -> IndicatorReport {
        let filled = close.forward_fill();
        tracing::debug!(
            points = filled.len(),
            repaired = filled.defined_count() - close.defined_count(),
            "Forward-filled close series"
        );

        let smas: Vec<(usize, TimeSeries)> = self
            .smas
            .iter()
            .map(|(window, indicator)| (*window, run(&filled, indicator.clone())))
            .collect();
        let rsi = run(&filled, self.rsi.clone());
        let macd = run_macd(&filled, self.macd.clone());

        tracing::info!(
            points = filled.len(),
            sma_windows = ?self.params.sma_windows,
            rsi_defined = rsi.defined_count(),
            macd_defined = macd.macd.defined_count(),
            "Indicator report computed"
        );

        IndicatorReport {
            close: filled,
            smas,
            rsi_period: self.params.rsi_period,
            rsi,
            macd,
            rsi_overbought: self.params.rsi_overbought,
            rsi_oversold: self.params.rsi_oversold,
        }
    }
}
