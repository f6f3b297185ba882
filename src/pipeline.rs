use analytics::{CorrelationAnalyzer, CorrelationResult, JoinedObservation};
use anyhow::{Context, Result};
use configuration::Config;
use core_types::{close_series, SentimentEvent, TimeSeries};
use indicators::{IndicatorEngine, IndicatorReport};
use sentiment::{Aligner, DailySentimentSeries, SentimentScorer};

/// Everything the `correlate` command produces, kept together so the report
/// side can show exactly what was analyzed.
#[derive(Debug, Clone)]
pub struct CorrelationRun {
    pub events: Vec<SentimentEvent>,
    pub returns: TimeSeries,
    pub daily_sentiment: DailySentimentSeries,
    pub joined: Vec<JoinedObservation>,
    pub result: CorrelationResult,
}

fn load_close(config: &Config) -> Result<TimeSeries> {
    let bars = datasource::load_prices(&config.data.prices_path)
        .context("Failed to load price data")?;
    close_series(&bars).context("Price data is not a valid daily series")
}

/// Loads the price table and computes the configured indicator report.
pub fn run_indicators(config: &Config) -> Result<IndicatorReport> {
    let close = load_close(config)?;
    let engine = IndicatorEngine::new(config.indicators.clone())
        .context("Invalid indicator parameters")?;
    Ok(engine.compute(&close))
}

/// Loads prices and news, scores and aligns the headlines, and correlates
/// daily sentiment with daily percent returns.
pub fn run_correlation(config: &Config) -> Result<CorrelationRun> {
    let close = load_close(config)?;
    let events =
        datasource::load_news(&config.data.news_path).context("Failed to load news data")?;

    let returns = close.pct_change();
    let scored = SentimentScorer::default().score_events(&events);
    let daily_sentiment = Aligner::align(&scored);
    tracing::info!(
        headlines = events.len(),
        days = daily_sentiment.len(),
        "Sentiment aligned to daily series"
    );

    let analyzer = CorrelationAnalyzer::new(config.correlation.clone());
    let joined = analyzer.join(&returns, daily_sentiment.series());
    let result = analyzer
        .analyze_joined(&joined)
        .context("Cannot correlate returns with sentiment")?;

    Ok(CorrelationRun {
        events,
        returns,
        daily_sentiment,
        joined,
        result,
    })
}
