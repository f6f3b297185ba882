use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Indicator received invalid parameters: {0}")]
    InvalidParameters(String),
}
