use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chunker error: {0}")]
    ChunkerError(#[from] docrag_chunker::ChunkerError),

    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    #[error("Vector store error: {0}")]
    StoreError(String),

    #[error("Invalid docs path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Other(String),
}

impl IngestError {
    /// Create an embedding error
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::EmbeddingError(msg.into())
    }

    /// Create a vector store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreError(msg.into())
    }
}
