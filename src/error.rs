use std::io;
use thiserror::Error;

/// Custom result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for policy loading, file inspection and draft submission.
///
/// Upload rejections are not errors; see [`crate::Rejection`].
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid upload policy
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File could not be inspected
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// Required form field left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
