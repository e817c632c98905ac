//! One build: resolve → merge → load → generate.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::generator::{format_output, GenerationMeta, Generator};
use crate::include::{resolve_root, FileNode};

/// Knobs that change what a build does after rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Run `rustfmt` on the generated file.
    pub rustfmt: bool,
}

/// A configured build for one root configuration file.
#[derive(Debug)]
pub struct Pipeline {
    config_path: PathBuf,
    base_dir: PathBuf,
    options: PipelineOptions,
    generator: Generator,
}

impl Pipeline {
    pub fn new(config_path: impl Into<PathBuf>, options: PipelineOptions) -> Result<Self> {
        let config_path = config_path.into();
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self {
            config_path,
            base_dir,
            options,
            generator: Generator::new()?,
        })
    }

    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read the root file and every file it includes.
    pub fn resolve(&self) -> Result<FileNode> {
        resolve_root(&self.config_path)
    }

    /// Merge, load and generate from an already resolved tree. Returns the output path.
    pub fn build(&self, tree: &FileNode) -> Result<PathBuf> {
        let cfg = Configuration::from_document(tree.merged_document()?)?;
        let meta = GenerationMeta::for_source(&self.config_path);
        let path = self.generator.write(&cfg, &meta, &self.base_dir)?;
        if self.options.rustfmt {
            format_output(&path)?;
        }
        debug!(output = %path.display(), "build finished");
        Ok(path)
    }

    /// Resolve and build in one step.
    pub fn run(&self) -> Result<PathBuf> {
        let tree = self.resolve()?;
        self.build(&tree)
    }

    /// The merged document rendered back to YAML, without generating anything.
    pub fn merged_yaml(&self) -> Result<String> {
        merge_files(&self.config_path)
    }
}

/// Resolve the include tree rooted at `path` and return the merged document as YAML.
pub fn merge_files(path: &Path) -> Result<String> {
    let merged = resolve_root(path)?.merged_document()?;
    merged
        .to_yaml_string()
        .map_err(|e| Error::decode("merged configuration", e))
}
