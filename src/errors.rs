use thiserror::Error;

/// Error type that captures common projection failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Rate source error: {0}")]
    RateFetch(String),
}
