use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const IGNORED_SCOPES: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "node_modules",
    "build",
    "dist",
    "target",
    ".docusaurus",
    ".next",
];

const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

const MAX_FILE_SIZE_BYTES: u64 = 1_048_576; // 1 MB

/// Scanner for finding markdown documents in a docs tree
pub struct DocScanner {
    root: PathBuf,
}

impl DocScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan the tree for markdown files (.gitignore aware), sorted for
    /// deterministic processing order
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);
        builder.filter_entry(move |entry| !DocScanner::is_ignored_scope(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if let Ok(meta) = entry.metadata() {
                        if meta.len() > MAX_FILE_SIZE_BYTES {
                            log::debug!(
                                "Skipping large file {} ({} bytes > {})",
                                path.display(),
                                meta.len(),
                                MAX_FILE_SIZE_BYTES
                            );
                            continue;
                        }
                    }

                    if !Self::is_doc_file(path) {
                        continue;
                    }

                    files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!("Found {} markdown files", files.len());
        files
    }

    fn is_doc_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| DOC_EXTENSIONS.iter().any(|candidate| candidate == &ext))
    }

    fn is_ignored_scope(path: &Path, root: &Path) -> bool {
        if let Ok(relative) = path.strip_prefix(root) {
            for component in relative.components() {
                if let std::path::Component::Normal(name) = component {
                    let lowered = name.to_string_lossy().to_lowercase();
                    if IGNORED_SCOPES.iter().any(|ignored| ignored == &lowered) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::DocScanner;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_only_markdown_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("intro.md"), "# Intro").unwrap();
        fs::write(temp.path().join("guide.mdx"), "# Guide").unwrap();
        fs::write(temp.path().join("notes.txt"), "plain").unwrap();
        fs::write(temp.path().join("main.rs"), "fn main() {}").unwrap();

        let files = DocScanner::new(temp.path()).scan();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("guide.mdx")));
        assert!(files.iter().any(|p| p.ends_with("intro.md")));
    }

    #[test]
    fn skips_ignored_directories() {
        let temp = tempdir().unwrap();
        let modules = temp.path().join("node_modules").join("pkg");
        fs::create_dir_all(&modules).unwrap();
        fs::write(modules.join("readme.md"), "# Vendored").unwrap();
        fs::write(temp.path().join("index.md"), "# Index").unwrap();

        let files = DocScanner::new(temp.path()).scan();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("index.md"));
    }

    #[test]
    fn output_is_sorted() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.md"), "b").unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::write(temp.path().join("c.md"), "c").unwrap();

        let files = DocScanner::new(temp.path()).scan();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }
}
