use crate::boundary::{find_fence_spans, find_headings};
use crate::types::ContentType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Maximum number of keywords retained per chunk
pub const MAX_KEYWORDS: usize = 10;

const STOP_WORDS: &[&str] = &["the", "and", "for", "with", "this", "that", "from"];

static CAPITALIZED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("capitalized pattern compiles")
});
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern compiles"));
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*|\*([^*]+)\*").expect("emphasis pattern compiles"));

/// Estimate token count: `round(words * 1.3)` plus a flat 50 tokens per
/// complete code fence.
///
/// A deliberately crude linear model, not a tokenizer; the packing thresholds
/// are defined against exactly this estimate.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    let fences = find_fence_spans(text).len();
    (words as f64 * 1.3).round() as usize + 50 * fences
}

/// An ordered content classification rule: optional fence requirement plus a
/// keyword set, first match wins.
struct ClassificationRule {
    needs_fence: bool,
    any_of: &'static [&'static str],
    label: ContentType,
}

const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        needs_fence: true,
        any_of: &["example", "demo", "try"],
        label: ContentType::CodeExample,
    },
    ClassificationRule {
        needs_fence: true,
        any_of: &[],
        label: ContentType::CodeReference,
    },
    ClassificationRule {
        needs_fence: false,
        any_of: &["what is", "introduction", "overview", "understand"],
        label: ContentType::Explanation,
    },
    ClassificationRule {
        needs_fence: false,
        any_of: &["step", "first", "next", "then", "finally"],
        label: ContentType::Tutorial,
    },
    ClassificationRule {
        needs_fence: false,
        any_of: &["api", "function", "parameter", "returns"],
        label: ContentType::Reference,
    },
];

/// Classify chunk content by evaluating the rule table in fixed order.
/// Matching is case-insensitive substring search.
#[must_use]
pub fn classify_content_type(content: &str) -> ContentType {
    let lowered = content.to_lowercase();
    let has_fence = !find_fence_spans(content).is_empty();

    for rule in CLASSIFICATION_RULES {
        if rule.needs_fence && !has_fence {
            continue;
        }
        if rule.any_of.is_empty() || rule.any_of.iter().any(|kw| lowered.contains(kw)) {
            return rule.label;
        }
    }

    ContentType::General
}

/// Remove complete fence spans from content, keeping everything else.
fn strip_fences(content: &str) -> String {
    let spans = find_fence_spans(content);
    if spans.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut pos = 0;
    for span in &spans {
        out.push_str(&content[pos..span.start]);
        pos = span.end;
    }
    out.push_str(&content[pos..]);
    out
}

/// Extract up to [`MAX_KEYWORDS`] salient terms: Title-Case phrases, inline
/// code spans, and emphasized spans, with code fences stripped first.
///
/// Deduplication preserves first-seen order, which makes the truncation
/// deterministic.
#[must_use]
pub fn extract_keywords(content: &str) -> Vec<String> {
    let text = strip_fences(content);

    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();
    let mut consider = |term: &str| {
        if term.is_empty() {
            return;
        }
        if STOP_WORDS.contains(&term.to_lowercase().as_str()) {
            return;
        }
        if seen.insert(term.to_string()) {
            keywords.push(term.to_string());
        }
    };

    for m in CAPITALIZED_RE.find_iter(&text) {
        consider(m.as_str());
    }
    for caps in INLINE_CODE_RE.captures_iter(&text) {
        consider(&caps[1]);
    }
    for caps in EMPHASIS_RE.captures_iter(&text) {
        if let Some(inner) = caps.get(1).or_else(|| caps.get(2)) {
            consider(inner.as_str());
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Tracks the most recent heading title per level over a growing prefix of
/// the document.
///
/// Observing a heading at level L discards every recorded level deeper than
/// L before recording it, so the hierarchy always reads outermost to
/// innermost.
#[derive(Debug, Clone, Default)]
pub struct HeadingTracker {
    levels: BTreeMap<usize, String>,
}

impl HeadingTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the headings of a newly seen text fragment into the tracker
    pub fn observe(&mut self, text: &str) {
        for heading in find_headings(text) {
            self.levels.split_off(&(heading.level + 1));
            self.levels.insert(heading.level, heading.title);
        }
    }

    /// Recorded titles ordered by ascending level
    #[must_use]
    pub fn hierarchy(&self) -> Vec<String> {
        self.levels.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_estimate_tokens_words_only() {
        // 3 words -> round(3.9) = 4
        assert_eq!(estimate_tokens("one two three"), 4);
        // 10 words -> 13
        assert_eq!(estimate_tokens("a b c d e f g h i j"), 13);
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("   \n\t  "), 0);
    }

    #[test]
    fn test_estimate_tokens_counts_fences() {
        let text = "intro\n```python\nprint(1)\n```\n";
        // words: intro, ```python, print(1), ``` -> 4 -> round(5.2) = 5, plus 50
        assert_eq!(estimate_tokens(text), 55);
    }

    #[test]
    fn test_unclosed_fence_adds_no_penalty() {
        let text = "intro\n```python\nprint(1)\n";
        assert_eq!(estimate_tokens(text), 4);
    }

    #[test]
    fn test_classify_code_example_beats_code_reference() {
        let text = "Example usage:\n```js\nrun()\n```\n";
        assert_eq!(classify_content_type(text), ContentType::CodeExample);
    }

    #[test]
    fn test_classify_code_reference() {
        let text = "```js\nrun()\n```\n";
        assert_eq!(classify_content_type(text), ContentType::CodeReference);
    }

    #[test]
    fn test_classify_prose_branches() {
        assert_eq!(
            classify_content_type("What is a transform?"),
            ContentType::Explanation
        );
        assert_eq!(
            classify_content_type("Next, install the package."),
            ContentType::Tutorial
        );
        assert_eq!(
            classify_content_type("The function returns a handle."),
            ContentType::Reference
        );
        assert_eq!(classify_content_type("Nothing special here."), ContentType::General);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "First, an overview of the api.";
        let first = classify_content_type(text);
        for _ in 0..5 {
            assert_eq!(classify_content_type(text), first);
        }
        // "overview" rule sits above "first" and "api" rules.
        assert_eq!(first, ContentType::Explanation);
    }

    #[test]
    fn test_extract_keywords_sources() {
        let text = "Robot Operating System uses `rclpy` and **topics** for *messaging*.";
        let keywords = extract_keywords(text);

        assert!(keywords.contains(&"Robot Operating System".to_string()));
        assert!(keywords.contains(&"rclpy".to_string()));
        assert!(keywords.contains(&"topics".to_string()));
        assert!(keywords.contains(&"messaging".to_string()));
    }

    #[test]
    fn test_extract_keywords_skips_stop_words_and_fences() {
        let text = "The standard library.\n```rust\nInline Code Here\n```\nuse `and` wisely";
        let keywords = extract_keywords(text);

        assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("the")));
        assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("and")));
        assert!(!keywords.contains(&"Inline Code Here".to_string()));
    }

    #[test]
    fn test_extract_keywords_capped_and_deduped() {
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!("`term{i}` "));
        }
        text.push_str("`term0` ");

        let keywords = extract_keywords(&text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "term0");
        assert_eq!(keywords[9], "term9");
    }

    #[test]
    fn test_heading_tracker_replace_and_truncate() {
        let mut tracker = HeadingTracker::new();
        tracker.observe("# Guide\n## Install\n### Linux\n");
        assert_eq!(tracker.hierarchy(), vec!["Guide", "Install", "Linux"]);

        // A new level-2 heading clears the recorded level 3.
        tracker.observe("## Usage\n");
        assert_eq!(tracker.hierarchy(), vec!["Guide", "Usage"]);

        tracker.observe("# Appendix\n");
        assert_eq!(tracker.hierarchy(), vec!["Appendix"]);
    }

    #[test]
    fn test_heading_tracker_empty() {
        let tracker = HeadingTracker::new();
        assert!(tracker.hierarchy().is_empty());
    }
}
