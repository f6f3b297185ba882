use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough overlapping observations to correlate: found {found}, need at least 2")]
    InsufficientData { found: usize },

    #[error("Correlation is undefined: the {0} series has zero variance")]
    ZeroVariance(&'static str),

    #[error("Correlation is undefined: the {0} is not a finite number")]
    NonFinite(&'static str),

    #[error("Statistical distribution error: {0}")]
    Distribution(String),
}
