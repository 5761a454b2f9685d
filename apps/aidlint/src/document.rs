//! One-shot loader for the scan target.
//!
//! The file is read whole and held in memory twice over: as an ordered line
//! sequence for position-sensitive rules and as one concatenated blob for
//! whole-document substring rules.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded build recipe. Never mutated after construction.
pub struct Document {
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub text: String,
}

impl Document {
    /// Build a document from already-loaded text.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            lines,
            text,
        }
    }

    /// Read `path` in a single filesystem read.
    ///
    /// A missing path maps to `Error::NotFound`; any other read failure is
    /// the generic unexpected kind.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| Error::Unexpected {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, text))
    }

    /// First line of the file, or `""` for an empty document.
    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_splits_lines_and_keeps_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");
        fs::write(&path, "FROM nvidia/cuda:11.0-base\nRUN pip install torch\n").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.first_line(), "FROM nvidia/cuda:11.0-base");
        assert!(doc.text.contains("pip install torch"));
    }

    #[test]
    fn test_load_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Dockerfile");

        match Document::load(&path) {
            Err(Error::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_document_first_line_is_empty() {
        let doc = Document::new("Dockerfile", "");
        assert!(doc.lines.is_empty());
        assert_eq!(doc.first_line(), "");
    }
}
