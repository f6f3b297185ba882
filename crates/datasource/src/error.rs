use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Input '{}' is unavailable: {reason}", path.display())]
    InputUnavailable { path: PathBuf, reason: String },
}

impl DataSourceError {
    pub(crate) fn unavailable(path: &std::path::Path, reason: impl ToString) -> Self {
        DataSourceError::InputUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
