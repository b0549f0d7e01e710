use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur during document chunking
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Invalid configuration (bound ordering or zero bounds)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred while reading a source file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ChunkerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
