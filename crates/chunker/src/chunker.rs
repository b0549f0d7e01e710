use crate::annotate::{
    classify_content_type, estimate_tokens, extract_keywords, HeadingTracker,
};
use crate::boundary::{find_fence_spans, first_fence_language, has_links, FenceSpan};
use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::frontmatter;
use crate::packer::pack_section;
use crate::section::split_sections;
use crate::types::Chunk;
use serde::Serialize;
use std::path::Path;

/// Main chunker interface for processing markdown documents
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker, validating the configuration up front
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Chunk a document given its full text and a source identifier.
    ///
    /// The source identifier only contributes its file stem to chunk ids.
    /// Always produces a best-effort sequence; empty or whitespace-only
    /// input yields an empty one.
    pub fn chunk_document(&self, content: &str, source: &str) -> Vec<Chunk> {
        let (_frontmatter, body) = frontmatter::extract(content);
        let fences = find_fence_spans(body);
        let stem = source_stem(source);

        let mut chunks = Vec::new();
        let mut tracker = HeadingTracker::new();
        let mut position = 0;

        for range in split_sections(body, &fences) {
            let section = &body[range.clone()];

            // Section boundaries never fall inside a fence, so every fence
            // overlapping this range lies wholly within it.
            let section_fences: Vec<FenceSpan> = fences
                .iter()
                .filter(|f| f.start >= range.start && f.end <= range.end)
                .map(|f| FenceSpan {
                    start: f.start - range.start,
                    end: f.end - range.start,
                    language: f.language.clone(),
                })
                .collect();

            let pieces: Vec<&str> = if estimate_tokens(section) <= self.config.max_chunk_tokens {
                vec![section]
            } else {
                pack_section(section, &section_fences, &self.config)
            };

            for piece in pieces {
                if piece.trim().is_empty() {
                    continue;
                }

                position += 1;
                chunks.push(build_chunk(piece, tracker.hierarchy(), position, &stem));
                tracker.observe(piece);
            }
        }

        log::debug!("Chunked {source}: {} chunks", chunks.len());
        chunks
    }

    /// Read and chunk a markdown file
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<Chunk>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let source = path.to_str().unwrap_or("unknown");
        Ok(self.chunk_document(&content, source))
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}

fn build_chunk(content: &str, heading_hierarchy: Vec<String>, position: usize, stem: &str) -> Chunk {
    Chunk {
        heading_hierarchy,
        content_type: classify_content_type(content),
        language: first_fence_language(content),
        keywords: extract_keywords(content),
        character_count: content.chars().count(),
        token_estimate: estimate_tokens(content),
        has_code: !find_fence_spans(content).is_empty(),
        has_links: has_links(content),
        position,
        chunk_id: format!("{stem}-{position:03}"),
        content: content.to_string(),
    }
}

fn source_stem(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(source)
        .to_string()
}

/// Statistics about a produced chunk sequence
#[derive(Debug, Clone, Serialize)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_tokens: usize,
    pub avg_tokens_per_chunk: usize,
    pub chunks_with_code: usize,
    pub min_tokens: usize,
    pub max_tokens: usize,
}

impl ChunkingStats {
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        Self {
            total_chunks: chunks.len(),
            total_tokens: chunks.iter().map(|c| c.token_estimate).sum(),
            avg_tokens_per_chunk: if chunks.is_empty() {
                0
            } else {
                chunks.iter().map(|c| c.token_estimate).sum::<usize>() / chunks.len()
            },
            chunks_with_code: chunks.iter().filter(|c| c.has_code).count(),
            min_tokens: chunks.iter().map(|c| c.token_estimate).min().unwrap_or(0),
            max_tokens: chunks.iter().map(|c| c.token_estimate).max().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Tokens: {} | Avg: {} | With code: {} | Range: {}-{}",
            self.total_chunks,
            self.total_tokens,
            self.avg_tokens_per_chunk,
            self.chunks_with_code,
            self.min_tokens,
            self.max_tokens
        )
    }
}
