use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Duplicate timestamp {0} in series input")]
    DuplicateTimestamp(NaiveDate),

    #[error("Series input is out of order: {previous} is followed by {next}")]
    OutOfOrder { previous: NaiveDate, next: NaiveDate },
}
