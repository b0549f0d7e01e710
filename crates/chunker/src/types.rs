use serde::{Deserialize, Serialize};

/// A semantic chunk of document text with derived metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Exact substring of the document assigned to this chunk
    pub content: String,

    /// Heading titles active at the chunk's start, outermost first
    pub heading_hierarchy: Vec<String>,

    /// Content classification
    pub content_type: ContentType,

    /// Language tag of the chunk's first fenced block, if declared
    pub language: Option<String>,

    /// Salient terms extracted from the chunk (at most 10, first-seen order)
    pub keywords: Vec<String>,

    /// Content length in characters
    pub character_count: usize,

    /// Heuristic token estimate (not a real tokenizer count)
    pub token_estimate: usize,

    /// Whether the content contains a complete fenced code block
    pub has_code: bool,

    /// Whether the content contains a markdown link
    pub has_links: bool,

    /// 1-based sequence index within the document
    pub position: usize,

    /// Stable identifier, unique within a document
    pub chunk_id: String,
}

/// Classification of a chunk's content, assigned by the first matching rule
/// in a fixed ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Fenced code accompanied by example/demo wording
    CodeExample,
    /// Fenced code without example wording
    CodeReference,
    /// Conceptual prose (introductions, overviews)
    Explanation,
    /// Step-by-step instructional prose
    Tutorial,
    /// API/function/parameter documentation
    Reference,
    /// Anything else
    General,
}

impl ContentType {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeExample => "code_example",
            Self::CodeReference => "code_reference",
            Self::Explanation => "explanation",
            Self::Tutorial => "tutorial",
            Self::Reference => "reference",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_round_trip() {
        let json = serde_json::to_string(&ContentType::CodeExample).unwrap();
        assert_eq!(json, "\"code_example\"");
        let back: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContentType::CodeExample);
    }

    #[test]
    fn test_content_type_as_str() {
        assert_eq!(ContentType::General.as_str(), "general");
        assert_eq!(ContentType::CodeReference.as_str(), "code_reference");
        assert_eq!(ContentType::Tutorial.to_string(), "tutorial");
    }

    #[test]
    fn test_chunk_serializes_all_fields() {
        let chunk = Chunk {
            content: "Some text".to_string(),
            heading_hierarchy: vec!["Intro".to_string()],
            content_type: ContentType::General,
            language: None,
            keywords: vec![],
            character_count: 9,
            token_estimate: 3,
            has_code: false,
            has_links: false,
            position: 1,
            chunk_id: "doc-001".to_string(),
        };

        let value = serde_json::to_value(&chunk).unwrap();
        assert_eq!(value["position"], 1);
        assert_eq!(value["chunk_id"], "doc-001");
        assert_eq!(value["content_type"], "general");
        assert!(value["language"].is_null());
    }
}
