use std::result::Result as StdResult;

use thiserror::Error;

/// Failures raised by the layers around the engines: configuration, storage
/// and command-line input. The engines themselves are total.
#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, ProgressionError>;
