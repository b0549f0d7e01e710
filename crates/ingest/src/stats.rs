use docrag_chunker::Chunk;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics about one ingest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Number of files that produced chunks
    pub files: usize,

    /// Number of chunks created
    pub chunks: usize,

    /// Sum of token estimates across all chunks
    pub total_tokens: usize,

    /// Chunks containing a complete code fence
    pub chunks_with_code: usize,

    /// Chunk count per content type label
    pub content_types: HashMap<String, usize>,

    /// Per-file errors encountered (the files were skipped)
    pub errors: Vec<String>,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl IngestStats {
    pub fn new() -> Self {
        Self {
            files: 0,
            chunks: 0,
            total_tokens: 0,
            chunks_with_code: 0,
            content_types: HashMap::new(),
            errors: Vec::new(),
            time_ms: 0,
        }
    }

    /// Record a successfully chunked file
    pub fn add_file(&mut self, chunks: &[Chunk]) {
        self.files += 1;
        self.chunks += chunks.len();
        for chunk in chunks {
            self.total_tokens += chunk.token_estimate;
            if chunk.has_code {
                self.chunks_with_code += 1;
            }
            *self
                .content_types
                .entry(chunk.content_type.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Mean token estimate per chunk, zero on an empty run
    #[must_use]
    pub fn avg_chunk_tokens(&self) -> usize {
        if self.chunks == 0 {
            0
        } else {
            self.total_tokens / self.chunks
        }
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
