//! Documentation ingest pipeline
//!
//! Walks a docs tree, chunks every markdown file with `docrag-chunker`,
//! embeds chunk contents through a pluggable [`EmbeddingProvider`], and
//! upserts the resulting points into a [`VectorSink`].
//!
//! ```text
//! docs/ --scan--> files --chunk--> chunks --embed--> points --upsert--> sink
//!                                     |                  ^
//!                                     +----- cache ------+
//! ```
//!
//! Embeddings are memoized per `(text, model)` pair so re-ingesting
//! unchanged content costs no provider calls. Point ids are derived
//! from the file path and chunk id, so a re-run overwrites the same
//! points instead of accumulating duplicates.

pub mod cache;
pub mod embed;
pub mod error;
pub mod path_meta;
pub mod payload;
pub mod pipeline;
pub mod scanner;
pub mod stats;

pub use cache::EmbeddingCache;
pub use embed::{EmbeddingProvider, VectorSink};
pub use error::{IngestError, Result};
pub use path_meta::PathMetadata;
pub use payload::{point_id, ChunkPayload, EmbeddedPoint};
pub use pipeline::IngestPipeline;
pub use scanner::DocScanner;
pub use stats::IngestStats;
