use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::FileNode;
use crate::error::{DecodeError, Error, Result};

static INCLUDE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"^!include\s+"*([^"]+?)"*$"#).expect("include directive regex")
});

/// Files currently being resolved along one branch, root first.
#[derive(Debug, Clone, Default)]
pub struct IncludeChain(Vec<PathBuf>);

impl IncludeChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|p| p == path)
    }

    /// A new chain with `path` appended; `self` is left untouched so sibling branches
    /// never see each other's entries.
    #[must_use]
    pub fn extended(&self, path: &Path) -> Self {
        let mut next = self.0.clone();
        next.push(path.to_path_buf());
        IncludeChain(next)
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    /// Fail with [`Error::IncludeCycle`] if `path` is already being resolved.
    fn check(&self, path: &Path) -> Result<()> {
        if !self.contains(path) {
            return Ok(());
        }
        let mut cycle = self.0.clone();
        cycle.push(path.to_path_buf());
        Err(Error::IncludeCycle {
            path: path.to_path_buf(),
            chain: cycle,
        })
    }
}

/// Open the root configuration at `path` and resolve its include tree.
///
/// The root's parent directory becomes the base directory for every include.
pub fn resolve_root(path: &Path) -> Result<FileNode> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path.file_name().map(Path::new).unwrap_or(path);
    let resolved = clean_path(&base_dir.join(file_name));
    let file = File::open(&resolved).map_err(|e| Error::not_found(&resolved, e))?;
    resolve_includes(file_name, file, base_dir, &IncludeChain::new())
}

/// Resolve `file_name` (relative to `base_dir`), whose content is read from `reader`.
///
/// Directive lines become children, resolved depth-first; every other line is kept
/// with a trailing newline.
pub fn resolve_includes<R: Read>(
    file_name: &Path,
    reader: R,
    base_dir: &Path,
    chain: &IncludeChain,
) -> Result<FileNode> {
    let path = clean_path(&base_dir.join(file_name));
    chain.check(&path)?;
    let chain = chain.extended(&path);

    let mut content = String::new();
    let mut targets = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|e| read_error(&path, e))?;
        match INCLUDE_DIRECTIVE.captures(line.trim()) {
            Some(caps) => targets.push(PathBuf::from(&caps[1])),
            None => {
                content.push_str(&line);
                content.push('\n');
            }
        }
    }
    debug!(path = %path.display(), includes = targets.len(), "resolved configuration file");

    let mut includes = Vec::with_capacity(targets.len());
    for target in targets {
        let target_path = clean_path(&base_dir.join(&target));
        chain.check(&target_path)?;
        let file = File::open(&target_path).map_err(|e| Error::not_found(&target_path, e))?;
        includes.push(resolve_includes(&target, file, base_dir, &chain)?);
    }

    Ok(FileNode {
        path,
        content,
        includes,
    })
}

/// A read that fails on content (not UTF-8) is a decode error, anything else means the
/// file could not be read.
fn read_error(path: &Path, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::InvalidData {
        Error::decode(format!("'{}'", path.display()), DecodeError::NotUtf8)
    } else {
        Error::not_found(path, err)
    }
}

/// Lexically normalise a path: drop `.` components and fold `dir/..` pairs.
///
/// Leading `..` components that cannot be folded are kept.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}
