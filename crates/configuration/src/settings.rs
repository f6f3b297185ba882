use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its defaults, so an absent `config.toml` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSources,
    pub indicators: IndicatorParams,
    pub correlation: CorrelationParams,
    pub render: RenderConfig,
}

/// Where the input tables live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Daily price table with at least `Date` and `Close` columns.
    pub prices_path: PathBuf,
    /// News table with `date` and `headline` columns.
    pub news_path: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            prices_path: PathBuf::from("AAPL_historical_data.csv"),
            news_path: PathBuf::from("sample_news_data.csv"),
        }
    }
}

/// Windows and thresholds for the indicator report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    /// One simple moving average is computed per entry. Also accepts a single
    /// window, which is how a one-item environment override arrives.
    #[serde(deserialize_with = "one_or_many_windows")]
    pub sma_windows: Vec<usize>,
    pub rsi_period: usize,
    /// RSI at or above this value is reported as overbought.
    pub rsi_overbought: f64,
    /// RSI at or below this value is reported as oversold.
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

fn one_or_many_windows<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WindowsVisitor;

    impl<'de> Visitor<'de> for WindowsVisitor {
        type Value = Vec<usize>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a window length or a list of window lengths")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            usize::try_from(v)
                .map(|w| vec![w])
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            usize::try_from(v)
                .map(|w| vec![w])
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.split(',')
                .map(|part| {
                    part.trim()
                        .parse::<usize>()
                        .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                })
                .collect()
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut windows = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(window) = seq.next_element::<usize>()? {
                windows.push(window);
            }
            Ok(windows)
        }
    }

    deserializer.deserialize_any(WindowsVisitor)
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_windows: vec![50, 200],
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

/// Cutoffs used to classify a correlation result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CorrelationParams {
    /// `|r|` strictly above this is a strong correlation.
    pub strong_threshold: f64,
    /// `|r|` strictly above this (and not strong) is a moderate correlation.
    pub moderate_threshold: f64,
    /// A p-value strictly below this is significant.
    pub significance_level: f64,
}

impl Default for CorrelationParams {
    fn default() -> Self {
        Self {
            strong_threshold: 0.5,
            moderate_threshold: 0.3,
            significance_level: 0.05,
        }
    }
}

/// Settings handed to the renderer. Nothing in the analysis core reads them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory that receives every exported artifact. Created on demand.
    pub output_dir: PathBuf,
    /// Multiplier applied to sentiment when it is overlaid on percent returns.
    pub sentiment_scale: f64,
    /// Number of characters kept when a headline is used as an annotation.
    pub headline_preview_chars: usize,
    /// Number of trailing rows shown in the console indicator table.
    pub console_tail_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            sentiment_scale: 10.0,
            headline_preview_chars: 10,
            console_tail_rows: 5,
        }
    }
}
