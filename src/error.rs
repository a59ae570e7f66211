use std::io;
use thiserror::Error;

/// Custom error type for the retime application
#[derive(Error, Debug)]
pub enum RetimeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Vault error: {0}")]
    Vault(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for the retime application
pub type Result<T> = std::result::Result<T, RetimeError>;

impl RetimeError {
    /// Create a manifest error
    pub fn manifest<S: Into<String>>(msg: S) -> Self {
        RetimeError::Manifest(msg.into())
    }

    /// Create a vault error
    pub fn vault<S: Into<String>>(msg: S) -> Self {
        RetimeError::Vault(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        RetimeError::InvalidPath(msg.into())
    }
}
