use std::fmt;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{Error, Result};

/// One physical configuration file in the include tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Resolved, lexically cleaned path.
    pub path: PathBuf,
    /// File content with directive lines removed.
    pub content: String,
    /// One child per directive, in directive order.
    pub includes: Vec<FileNode>,
}

impl FileNode {
    /// Every file in the tree in discovery (pre-order) order.
    #[must_use]
    pub fn paths(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        self.collect_paths(&mut out);
        out
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a Path>) {
        out.push(&self.path);
        for child in &self.includes {
            child.collect_paths(out);
        }
    }

    /// Decode this file's own content.
    pub fn decode(&self) -> Result<Document> {
        Document::from_yaml_str(&self.content)
            .map_err(|e| Error::decode(format!("'{}'", self.path.display()), e))
    }

    /// Fold the subtree into one document: children first, in include order, then this
    /// file's own content on top.
    pub fn merged_document(&self) -> Result<Document> {
        let own = self.decode()?;
        let mut merged = Document::default();
        for child in &self.includes {
            merged.merge(child.merged_document()?);
        }
        merged.merge(own);
        Ok(merged)
    }
}

impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----------------------------")?;
        writeln!(f, "File: {}", self.path.display())?;
        write!(f, "Includes:")?;
        for child in &self.includes {
            write!(f, " {}", child.path.display())?;
        }
        writeln!(f)?;
        writeln!(f, "-----------------------------")?;
        writeln!(f, "{}EOF", self.content)?;
        writeln!(f)?;
        for child in &self.includes {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}
