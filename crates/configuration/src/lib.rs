use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, CorrelationParams, DataSources, IndicatorParams, RenderConfig};

/// Prefix of the environment variables that override file settings,
/// e.g. `MERIDIAN__RENDER__OUTPUT_DIR=out`.
pub const ENV_PREFIX: &str = "MERIDIAN";

/// Keys whose environment value is a comma-separated list,
/// e.g. `MERIDIAN__INDICATORS__SMA_WINDOWS=20,50`.
const ENV_LIST_KEYS: [&str; 1] = ["indicators.sma_windows"];

/// Loads the application configuration.
///
/// Sources are layered in order: built-in defaults, then the TOML file, then
/// `MERIDIAN__*` environment variables. When `path` is `None` an optional
/// `config.toml` in the working directory is used; an explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_env(path, None)
}

/// `env` replaces the process environment when given.
fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let file_source = match path {
        Some(path) => config::File::from(path.to_path_buf())
            .format(config::FileFormat::Toml)
            .required(true),
        None => config::File::with_name("config.toml")
            .format(config::FileFormat::Toml)
            .required(false),
    };

    let mut env_source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .source(env);
    for key in ENV_LIST_KEYS {
        env_source = env_source.with_list_parse_key(key);
    }

    let builder = config::Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Rejects settings that would make an indicator or a classification meaningless.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let ind = &config.indicators;
    if ind.sma_windows.iter().any(|w| *w == 0) {
        return Err(ConfigError::ValidationError(
            "SMA windows must be greater than 0".to_string(),
        ));
    }
    if ind.rsi_period == 0 || ind.macd_fast == 0 || ind.macd_slow == 0 || ind.macd_signal == 0 {
        return Err(ConfigError::ValidationError(
            "RSI and MACD periods must be greater than 0".to_string(),
        ));
    }
    if ind.macd_fast >= ind.macd_slow {
        return Err(ConfigError::ValidationError(
            "MACD fast period must be less than the slow period".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&ind.rsi_oversold)
        || !(0.0..=100.0).contains(&ind.rsi_overbought)
        || ind.rsi_oversold >= ind.rsi_overbought
    {
        return Err(ConfigError::ValidationError(
            "RSI thresholds must satisfy 0 <= oversold < overbought <= 100".to_string(),
        ));
    }

    let corr = &config.correlation;
    if !(0.0..=1.0).contains(&corr.moderate_threshold)
        || !(0.0..=1.0).contains(&corr.strong_threshold)
        || corr.moderate_threshold >= corr.strong_threshold
    {
        return Err(ConfigError::ValidationError(
            "Correlation thresholds must satisfy 0 <= moderate < strong <= 1".to_string(),
        ));
    }
    if !(corr.significance_level > 0.0 && corr.significance_level < 1.0) {
        return Err(ConfigError::ValidationError(
            "Significance level must lie strictly between 0 and 1".to_string(),
        ));
    }

    if !config.render.sentiment_scale.is_finite() {
        return Err(ConfigError::ValidationError(
            "Sentiment scale must be a finite number".to_string(),
        ));
    }

    Ok(())
}
