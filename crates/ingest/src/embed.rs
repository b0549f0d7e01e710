use crate::error::Result;
use crate::payload::EmbeddedPoint;
use async_trait::async_trait;

/// Downstream embedding collaborator: maps chunk contents to vectors.
///
/// Implementations live outside this crate (API clients, local models);
/// tests use in-memory fakes.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Identifier of the embedding model, used in cache keys
    fn model_id(&self) -> &str;

    /// Embed a batch of texts, one vector per input, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Downstream indexing collaborator: persists embedded points.
#[async_trait]
pub trait VectorSink: Send + Sync {
    /// Store points; an existing point with the same id is replaced
    async fn upsert(&self, points: Vec<EmbeddedPoint>) -> Result<()>;
}
