//! # docrag Chunker
//!
//! Semantic chunking of Markdown/MDX documents for retrieval-augmented
//! generation.
//!
//! ## Philosophy
//!
//! The chunker creates bounded, semantically coherent text fragments that:
//! - Respect markdown structure (major headings start new sections)
//! - Keep well-formed fenced code blocks intact
//! - Carry the heading hierarchy active at each chunk's position
//! - Stay near a target token size without splitting code
//!
//! ## Architecture
//!
//! ```text
//! Document text
//!     │
//!     ├──> Frontmatter strip (leading --- block)
//!     │
//!     ├──> Boundary detection
//!     │    ├─> Fenced code spans (well-formed only)
//!     │    └─> Heading lines (level 1-6)
//!     │
//!     ├──> Section split (level 1-2 headings)
//!     │
//!     ├──> Greedy paragraph packing (target/maximum bounds,
//!     │    code blocks atomic)
//!     │
//!     └──> Annotation + assembly
//!          ├─> hierarchy, classification, keywords, sizes
//!          └─> Emit ordered Chunk[] with stable ids
//! ```
//!
//! ## Example
//!
//! ```rust
//! use docrag_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let chunks = chunker.chunk_document("# Intro\n\nSome text.\n", "docs/intro.md");
//! for chunk in chunks {
//!     println!("{} [{}]: {} tokens", chunk.chunk_id, chunk.content_type, chunk.token_estimate);
//! }
//! ```

mod annotate;
mod boundary;
mod chunker;
mod config;
mod error;
mod frontmatter;
mod packer;
mod section;
mod types;

pub use annotate::{classify_content_type, estimate_tokens, extract_keywords, HeadingTracker};
pub use boundary::{
    find_fence_spans, find_headings, first_fence_language, has_links, FenceSpan, Heading,
};
pub use chunker::{Chunker, ChunkingStats};
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use frontmatter::{extract as extract_frontmatter, Frontmatter};
pub use types::{Chunk, ContentType};
