use crate::annotate::estimate_tokens;
use crate::boundary::FenceSpan;
use crate::config::ChunkerConfig;
use std::ops::Range;

/// Split a section into paragraph ranges on blank-line separators.
///
/// A `\n\n` separator strictly inside a fence span does not split, so a code
/// block containing blank lines stays in one paragraph.
fn split_paragraphs(section: &str, fences: &[FenceSpan]) -> Vec<Range<usize>> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    let bytes = section.as_bytes();
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'\n' && bytes[pos + 1] == b'\n' {
            let splits_code = fences.iter().any(|f| f.contains(pos + 1));
            if !splits_code {
                paragraphs.push(start..pos);
                start = pos + 2;
                pos = start;
                continue;
            }
        }
        pos += 1;
    }

    paragraphs.push(start..section.len());
    paragraphs
}

/// Greedily pack one section's paragraphs into chunk contents.
///
/// Paragraphs merge until the running token estimate would pass the target
/// size; a paragraph overlapping a code span whose own estimate passes the
/// maximum size is force-flushed into a chunk of its own, with anything
/// accumulated before it emitted first. Returned slices are contiguous
/// substrings of the section.
pub fn pack_section<'a>(
    section: &'a str,
    fences: &[FenceSpan],
    config: &ChunkerConfig,
) -> Vec<&'a str> {
    let mut chunks = Vec::new();
    let mut acc: Vec<Range<usize>> = Vec::new();
    let mut acc_tokens = 0usize;

    for para in split_paragraphs(section, fences) {
        let text = &section[para.clone()];
        let para_tokens = estimate_tokens(text);
        let touches_code = fences
            .iter()
            .any(|f| f.start < para.end && para.start < f.end);

        if acc_tokens + para_tokens > config.target_chunk_tokens && !acc.is_empty() {
            chunks.push(flush(section, &acc));
            acc.clear();
            acc_tokens = 0;
        }
        acc.push(para.clone());
        acc_tokens += para_tokens;

        if touches_code && para_tokens > config.max_chunk_tokens {
            acc.pop();
            if !acc.is_empty() {
                chunks.push(flush(section, &acc));
                acc.clear();
            }
            chunks.push(text);
            acc_tokens = 0;
        }
    }

    if !acc.is_empty() {
        chunks.push(flush(section, &acc));
    }

    chunks
}

fn flush<'a>(section: &'a str, paragraphs: &[Range<usize>]) -> &'a str {
    let start = paragraphs[0].start;
    let end = paragraphs[paragraphs.len() - 1].end;
    &section[start..end]
}
