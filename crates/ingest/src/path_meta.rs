use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)week-(\d+)").expect("week pattern compiles"));

/// Course metadata derived from a document's location in the docs tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathMetadata {
    /// Module name, e.g. "Module 1 Ros2"; "Unknown" when no marker is found
    pub module: String,

    /// Week number from a `week-NN` component; 0 when absent
    pub week: u32,

    /// Full source path as given
    pub file_path: String,

    /// File name component
    pub file_name: String,
}

/// Extract module and week information from a file path.
///
/// Any path component starting with `module-` (case-insensitive) names the
/// module; any component starting with `week-` carries the week number.
pub fn extract(path: &Path) -> PathMetadata {
    let mut module = "Unknown".to_string();
    let mut week = 0;

    for component in path.components() {
        let std::path::Component::Normal(name) = component else {
            continue;
        };
        let Some(name) = name.to_str() else {
            continue;
        };
        let lowered = name.to_lowercase();

        if lowered.starts_with("module-") {
            module = title_case(&name.replace('-', " "));
        }

        if lowered.starts_with("week-") {
            if let Some(caps) = WEEK_RE.captures(name) {
                week = caps[1].parse().unwrap_or(0);
            }
        }
    }

    PathMetadata {
        module,
        week,
        file_path: path.display().to_string(),
        file_name: path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Title-case a string the way Python's `str.title()` does: every letter
/// following a non-letter is uppercased, the rest lowercased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_module_and_week() {
        let meta = extract(Path::new("docs/Module-1-ROS2/week-01-intro.mdx"));

        assert_eq!(meta.module, "Module 1 Ros2");
        assert_eq!(meta.week, 1);
        assert_eq!(meta.file_name, "week-01-intro.mdx");
        assert_eq!(meta.file_path, "docs/Module-1-ROS2/week-01-intro.mdx");
    }

    #[test]
    fn test_defaults_without_markers() {
        let meta = extract(Path::new("docs/reference/api.md"));
        assert_eq!(meta.module, "Unknown");
        assert_eq!(meta.week, 0);
    }

    #[test]
    fn test_week_marker_case_insensitive() {
        let meta = extract(Path::new("docs/Week-12-final/page.md"));
        assert_eq!(meta.week, 12);
    }

    #[test]
    fn test_title_case_matches_python() {
        assert_eq!(title_case("module 1 ROS2"), "Module 1 Ros2");
        assert_eq!(title_case("getting started"), "Getting Started");
        assert_eq!(title_case("a2b"), "A2B");
        assert_eq!(title_case(""), "");
    }
}
