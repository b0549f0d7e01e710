use crate::cache::EmbeddingCache;
use crate::embed::{EmbeddingProvider, VectorSink};
use crate::error::{IngestError, Result};
use crate::path_meta;
use crate::payload::{ChunkPayload, EmbeddedPoint};
use crate::scanner::DocScanner;
use crate::stats::IngestStats;
use docrag_chunker::{Chunk, Chunker, ChunkerConfig};
use std::path::Path;
use std::time::Instant;

/// End-to-end ingest: scan a docs tree, chunk each file, embed chunk
/// contents, and hand the resulting points to the vector sink.
///
/// A file that fails to process is logged, recorded in the stats, and
/// skipped; the rest of the run continues.
pub struct IngestPipeline<'a, E, S> {
    chunker: Chunker,
    provider: &'a E,
    sink: &'a S,
    cache: EmbeddingCache,
}

impl<'a, E: EmbeddingProvider, S: VectorSink> IngestPipeline<'a, E, S> {
    /// Create a pipeline; fails on invalid chunker configuration
    pub fn new(config: ChunkerConfig, provider: &'a E, sink: &'a S) -> Result<Self> {
        Ok(Self {
            chunker: Chunker::new(config)?,
            provider,
            sink,
            cache: EmbeddingCache::new(),
        })
    }

    /// Ingest every markdown file under `root`, upserting all points in one
    /// batch at the end
    pub async fn ingest_dir(&mut self, root: &Path) -> Result<IngestStats> {
        if !root.is_dir() {
            return Err(IngestError::InvalidPath(root.display().to_string()));
        }

        let started = Instant::now();
        let mut stats = IngestStats::new();
        let mut points = Vec::new();

        let files = DocScanner::new(root).scan();
        for file in &files {
            match self.process_file(file).await {
                Ok((file_points, chunks)) => {
                    if chunks.is_empty() {
                        log::debug!("No chunks for {}", file.display());
                        continue;
                    }
                    stats.add_file(&chunks);
                    points.extend(file_points);
                }
                Err(e) => {
                    log::error!("Failed to process {}: {e}", file.display());
                    stats.add_error(format!("{}: {e}", file.display()));
                }
            }
        }

        if !points.is_empty() {
            log::info!("Upserting {} points", points.len());
            self.sink.upsert(points).await?;
        }

        stats.time_ms = started.elapsed().as_millis() as u64;
        log::info!(
            "Ingest completed: {} files, {} chunks, {} errors",
            stats.files,
            stats.chunks,
            stats.errors.len()
        );
        Ok(stats)
    }

    async fn process_file(&mut self, path: &Path) -> Result<(Vec<EmbeddedPoint>, Vec<Chunk>)> {
        log::debug!("Processing {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let source = path.to_str().unwrap_or("unknown");

        let chunks = self.chunker.chunk_document(&content, source);
        if chunks.is_empty() {
            return Ok((Vec::new(), chunks));
        }

        let meta = path_meta::extract(path);
        let vectors = self.embed_with_cache(&chunks).await?;

        let points = chunks
            .iter()
            .zip(vectors)
            .map(|(chunk, vector)| EmbeddedPoint::new(vector, ChunkPayload::new(chunk, &meta)))
            .collect();

        Ok((points, chunks))
    }

    /// Embed chunk contents, serving repeats from the cache and batching
    /// only the misses to the provider
    async fn embed_with_cache(&mut self, chunks: &[Chunk]) -> Result<Vec<Vec<f32>>> {
        let model = self.provider.model_id().to_string();

        let mut vectors: Vec<Vec<f32>> = vec![Vec::new(); chunks.len()];
        let mut missing_idx = Vec::new();
        let mut missing_texts = Vec::new();

        for (i, chunk) in chunks.iter().enumerate() {
            if let Some(vector) = self.cache.get(&chunk.content, &model) {
                vectors[i] = vector.clone();
            } else {
                missing_idx.push(i);
                missing_texts.push(chunk.content.clone());
            }
        }

        if !missing_texts.is_empty() {
            let embedded = self.provider.embed_batch(&missing_texts).await?;
            if embedded.len() != missing_texts.len() {
                return Err(IngestError::embedding(format!(
                    "provider returned {} vectors for {} inputs",
                    embedded.len(),
                    missing_texts.len()
                )));
            }

            for ((&i, text), vector) in missing_idx.iter().zip(&missing_texts).zip(embedded) {
                self.cache.insert(text, &model, vector.clone());
                vectors[i] = vector;
            }
        }

        Ok(vectors)
    }

    /// The embedding cache accumulated so far
    #[must_use]
    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Drop all cached embeddings
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
