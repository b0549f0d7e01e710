use std::collections::HashMap;

/// Parsed frontmatter: flat `key: value` pairs.
pub type Frontmatter = HashMap<String, String>;

/// Extract a leading frontmatter block delimited by `---` lines.
///
/// The block must start at the very beginning of the document. Returns the
/// parsed pairs and the remaining body; without a block the original text is
/// returned unchanged. Lines inside the block with no `:` separator are
/// silently skipped.
pub fn extract(content: &str) -> (Option<Frontmatter>, &str) {
    let Some(inner) = content.strip_prefix("---\n") else {
        return (None, content);
    };

    let Some(close) = inner.find("\n---\n") else {
        return (None, content);
    };

    let block = &inner[..close];
    let body = &inner[close + "\n---\n".len()..];

    let mut frontmatter = Frontmatter::new();
    for line in block.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        frontmatter.insert(key, value.to_string());
    }

    (Some(frontmatter), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_simple_pairs() {
        let doc = "---\ntitle: Hello World\nsidebar_position: 3\n---\n# Body\n";
        let (fm, body) = extract(doc);

        let fm = fm.unwrap();
        assert_eq!(fm.get("title").map(String::as_str), Some("Hello World"));
        assert_eq!(fm.get("sidebar_position").map(String::as_str), Some("3"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_strips_quotes_from_values() {
        let doc = "---\ntitle: \"Quoted\"\nsubtitle: 'Single'\n---\nbody";
        let (fm, _) = extract(doc);

        let fm = fm.unwrap();
        assert_eq!(fm.get("title").map(String::as_str), Some("Quoted"));
        assert_eq!(fm.get("subtitle").map(String::as_str), Some("Single"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let doc = "---\ntitle: ok\nnot a pair\n---\nbody";
        let (fm, body) = extract(doc);

        let fm = fm.unwrap();
        assert_eq!(fm.len(), 1);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_no_frontmatter_returns_input() {
        let doc = "# Just a heading\n";
        let (fm, body) = extract(doc);
        assert!(fm.is_none());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_unterminated_block_returns_input() {
        let doc = "---\ntitle: dangling\n";
        let (fm, body) = extract(doc);
        assert!(fm.is_none());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_marker_not_at_start_is_plain_text() {
        let doc = "intro\n---\ntitle: x\n---\n";
        let (fm, body) = extract(doc);
        assert!(fm.is_none());
        assert_eq!(body, doc);
    }
}
