use once_cell::sync::Lazy;
use regex::Regex;

/// A well-formed fenced code block span within a text.
///
/// `start` is the offset of the opening fence line, `end` is the offset just
/// past the closing backticks. Fences that never close are not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSpan {
    pub start: usize,
    pub end: usize,
    /// Language tag declared on the opening fence, if non-empty
    pub language: Option<String>,
}

impl FenceSpan {
    /// Check whether a position falls strictly inside this span
    #[must_use]
    pub const fn contains(&self, pos: usize) -> bool {
        pos > self.start && pos < self.end
    }
}

/// A heading line: `level` leading `#` markers followed by a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub title: String,
    /// Offset of the heading's line start within the scanned text
    pub offset: usize,
}

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern compiles"));

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Try to read a fence opener at `line_start`: three backticks, an optional
/// word-character language tag, then a newline immediately. Returns the
/// newline offset and the tag.
fn fence_open(text: &str, line_start: usize) -> Option<(usize, Option<&str>)> {
    let rest = text[line_start..].strip_prefix("```")?;

    let mut tag_len = 0;
    for c in rest.chars() {
        if !is_word_char(c) {
            break;
        }
        tag_len += c.len_utf8();
    }

    if !rest[tag_len..].starts_with('\n') {
        return None;
    }

    let tag = if tag_len > 0 { Some(&rest[..tag_len]) } else { None };
    Some((line_start + 3 + tag_len, tag))
}

/// Scan text once for all well-formed fenced code block spans, ordered by
/// start offset.
///
/// A span opens at a fence-open line and ends at the first later line that
/// starts with three backticks. An open with no matching close is treated as
/// plain text and omitted.
pub fn find_fence_spans(text: &str) -> Vec<FenceSpan> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, Option<String>)> = None;
    let mut i = 0;

    while i < text.len() {
        match &open {
            None => {
                if let Some((newline, tag)) = fence_open(text, i) {
                    open = Some((i, tag.map(str::to_string)));
                    i = newline + 1;
                    continue;
                }
            }
            Some((start, tag)) => {
                if text[i..].starts_with("```") {
                    spans.push(FenceSpan {
                        start: *start,
                        end: i + 3,
                        language: tag.clone(),
                    });
                    open = None;
                }
            }
        }

        match text[i..].find('\n') {
            Some(off) => i += off + 1,
            None => break,
        }
    }

    spans
}

/// Parse a single line as a heading: 1-6 leading `#` (seven or more
/// disqualify), at least one whitespace character, then at least one further
/// character. The title is the remainder, trimmed.
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &line[level..];
    let mut chars = rest.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    chars.next()?;

    Some((level, rest.trim()))
}

/// Find all heading lines in text, in order of appearance.
///
/// Headings are detected independently of fence spans; a `# comment` line
/// inside a code block still counts, mirroring the heuristic nature of the
/// detector.
pub fn find_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for line in text.split('\n') {
        if let Some((level, title)) = parse_heading_line(line) {
            headings.push(Heading {
                level,
                title: title.to_string(),
                offset,
            });
        }
        offset += line.len() + 1;
    }

    headings
}

/// Language tag of the first fence opener that declares one.
///
/// Completeness of the fence is not required here; an opening line alone is
/// enough to carry the tag.
pub fn first_fence_language(text: &str) -> Option<String> {
    for line in text.split('\n') {
        if let Some(rest) = line.strip_prefix("```") {
            let tag: String = rest.chars().take_while(|&c| is_word_char(c)).collect();
            if !tag.is_empty() {
                return Some(tag);
            }
        }
    }
    None
}

/// Whether the text contains a markdown link `[label](url)`
#[must_use]
pub fn has_links(text: &str) -> bool {
    LINK_RE.is_match(text)
}
