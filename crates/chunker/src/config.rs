use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for markdown chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Minimum chunk size in tokens (advisory; avoids orphaned fragments)
    pub min_chunk_tokens: usize,

    /// Target chunk size in tokens (soft limit while merging paragraphs)
    pub target_chunk_tokens: usize,

    /// Maximum chunk size in tokens (hard limit that triggers forced splits)
    pub max_chunk_tokens: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_chunk_tokens: 200,
            target_chunk_tokens: 500,
            max_chunk_tokens: 800,
        }
    }
}

impl ChunkerConfig {
    /// Create config optimized for embeddings (smaller, focused chunks)
    pub fn for_embeddings() -> Self {
        Self {
            min_chunk_tokens: 100,
            target_chunk_tokens: 384,
            max_chunk_tokens: 512,
        }
    }

    /// Create config optimized for LLM context (larger, comprehensive chunks)
    pub fn for_llm_context() -> Self {
        Self {
            min_chunk_tokens: 200,
            target_chunk_tokens: 1024,
            max_chunk_tokens: 2048,
        }
    }

    /// Validate configuration. Bounds are never clamped silently.
    pub fn validate(&self) -> Result<()> {
        if self.min_chunk_tokens == 0 {
            return Err(ChunkerError::invalid_config("min_chunk_tokens must be > 0"));
        }

        if self.min_chunk_tokens > self.target_chunk_tokens {
            return Err(ChunkerError::invalid_config(format!(
                "min_chunk_tokens ({}) cannot exceed target_chunk_tokens ({})",
                self.min_chunk_tokens, self.target_chunk_tokens
            )));
        }

        if self.target_chunk_tokens > self.max_chunk_tokens {
            return Err(ChunkerError::invalid_config(format!(
                "target_chunk_tokens ({}) cannot exceed max_chunk_tokens ({})",
                self.target_chunk_tokens, self.max_chunk_tokens
            )));
        }

        Ok(())
    }
}
