use crate::boundary::{parse_heading_line, FenceSpan};
use std::ops::Range;

/// Split body text into sections at major (level 1-2) heading boundaries.
///
/// A qualifying heading line starts a new section unless it sits at the very
/// beginning of the body or strictly inside a fence span; text before the
/// first qualifying heading forms its own leading section. The returned
/// ranges are non-overlapping and concatenate back to the full body.
pub fn split_sections(body: &str, fences: &[FenceSpan]) -> Vec<Range<usize>> {
    let mut boundaries = vec![0];
    let mut offset = 0;

    for line in body.split('\n') {
        if offset > 0 {
            if let Some((level, _)) = parse_heading_line(line) {
                if level <= 2 && !fences.iter().any(|f| f.contains(offset)) {
                    boundaries.push(offset);
                }
            }
        }
        offset += line.len() + 1;
    }

    boundaries.push(body.len());
    boundaries
        .windows(2)
        .map(|pair| pair[0]..pair[1])
        .collect()
}
