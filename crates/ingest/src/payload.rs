use crate::path_meta::{title_case, PathMetadata};
use docrag_chunker::Chunk;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// The full metadata payload stored alongside a chunk's vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkPayload {
    // Path metadata
    pub module: String,
    pub week: u32,
    pub file_path: String,
    pub file_name: String,

    // Chunk content and identity
    pub content: String,
    pub chunk_id: String,
    pub position: usize,

    // Semantic metadata
    pub heading_hierarchy: Vec<String>,
    pub content_type: String,
    pub keywords: Vec<String>,

    // Code metadata; language is the literal string "none" when absent
    pub has_code: bool,
    pub language: String,
    pub has_links: bool,

    // Size metadata
    pub character_count: usize,
    pub token_estimate: usize,

    /// Display title derived from the file stem
    pub section: String,
}

impl ChunkPayload {
    /// Build the payload for one chunk of one source file
    #[must_use]
    pub fn new(chunk: &Chunk, meta: &PathMetadata) -> Self {
        let stem = Path::new(&meta.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        Self {
            module: meta.module.clone(),
            week: meta.week,
            file_path: meta.file_path.clone(),
            file_name: meta.file_name.clone(),
            content: chunk.content.clone(),
            chunk_id: chunk.chunk_id.clone(),
            position: chunk.position,
            heading_hierarchy: chunk.heading_hierarchy.clone(),
            content_type: chunk.content_type.as_str().to_string(),
            keywords: chunk.keywords.clone(),
            has_code: chunk.has_code,
            language: chunk
                .language
                .clone()
                .unwrap_or_else(|| "none".to_string()),
            has_links: chunk.has_links,
            character_count: chunk.character_count,
            token_estimate: chunk.token_estimate,
            section: title_case(&stem.replace('-', " ")),
        }
    }
}

/// An embedded chunk ready for vector-store upsert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedPoint {
    /// Deterministic id: SHA-256 of `"{file_path}:{chunk_id}"`, so
    /// re-ingesting a document overwrites its previous points
    pub id: String,
    pub vector: Vec<f32>,
    pub payload: ChunkPayload,
}

impl EmbeddedPoint {
    #[must_use]
    pub fn new(vector: Vec<f32>, payload: ChunkPayload) -> Self {
        let id = point_id(&payload.file_path, &payload.chunk_id);
        Self {
            id,
            vector,
            payload,
        }
    }
}

/// Stable point identifier for a chunk of a file
#[must_use]
pub fn point_id(file_path: &str, chunk_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(file_path.as_bytes());
    hasher.update(b":");
    hasher.update(chunk_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docrag_chunker::{Chunker, ChunkerConfig};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn sample_payload() -> ChunkPayload {
        let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
        let chunks = chunker.chunk_document(
            "# Intro\n\nHello `world`.\n",
            "docs/Module-1-ROS2/week-01-intro.mdx",
        );
        let meta = crate::path_meta::extract(Path::new("docs/Module-1-ROS2/week-01-intro.mdx"));
        ChunkPayload::new(&chunks[0], &meta)
    }

    #[test]
    fn test_payload_carries_path_and_chunk_fields() {
        let payload = sample_payload();

        assert_eq!(payload.module, "Module 1 Ros2");
        assert_eq!(payload.week, 1);
        assert_eq!(payload.chunk_id, "week-01-intro-001");
        assert_eq!(payload.position, 1);
        assert_eq!(payload.language, "none");
        assert_eq!(payload.section, "Week 01 Intro");
        assert!(payload.content.starts_with("# Intro"));
    }

    #[test]
    fn test_point_id_deterministic() {
        let a = point_id("docs/a.md", "a-001");
        let b = point_id("docs/a.md", "a-001");
        let c = point_id("docs/a.md", "a-002");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_point_inherits_payload_identity() {
        let payload = sample_payload();
        let point = EmbeddedPoint::new(vec![0.1, 0.2], payload.clone());

        assert_eq!(point.id, point_id(&payload.file_path, &payload.chunk_id));
        assert_eq!(point.vector.len(), 2);
    }
}
