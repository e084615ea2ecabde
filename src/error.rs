use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Invalid ngram size: {0}")]
    InvalidNgramSize(String),

    #[error("Normalization rule failed: {0}")]
    Rule(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error conversions
impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn threshold<S: Into<String>>(msg: S) -> Self {
        Error::InvalidThreshold(msg.into())
    }

    pub fn rule<S: Into<String>>(msg: S) -> Self {
        Error::Rule(msg.into())
    }

    /// True for the configuration-class failures that must reach the caller
    /// untouched (bad threshold, bad settings, failing rule).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::InvalidThreshold(_)
                | Error::InvalidNgramSize(_)
                | Error::Rule(_)
        )
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}
