//! Error types shared by every pipeline stage.
//!
//! Each stage fails fast with one of the [`Error`] variants; nothing is retried or
//! partially applied. The CLI wraps these in `anyhow` to add stage context, and the
//! watch loop compares their rendered text to suppress repeats.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

use crate::route_spec::RouteSpecError;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while resolving, merging, loading or generating a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A file transitively includes itself.
    #[error("include loop detected, '{}' is already included ({})", path.display(), format_chain(chain))]
    IncludeCycle {
        /// The path that was about to be opened a second time.
        path: PathBuf,
        /// The include chain leading to `path`, root first.
        chain: Vec<PathBuf>,
    },

    /// A referenced file is missing or unreadable.
    #[error("unable to read '{}': {source}", path.display())]
    IncludeNotFound {
        /// The resolved path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A document could not be decoded into the configuration model.
    #[error("error decoding {origin}: {source}")]
    Decode {
        /// File path, or `merged configuration` for the merged document.
        origin: String,
        /// What went wrong.
        #[source]
        source: DecodeError,
    },

    /// A route-spec string did not parse.
    #[error("error parsing route path '{spec}': {source}")]
    RouteSpec {
        /// The raw route-spec string.
        spec: String,
        /// Which grammar rule was violated.
        #[source]
        source: RouteSpecError,
    },

    /// Rendering or writing the output failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A contributing file could not be hashed.
    #[error("error calculating checksum of '{}': {source}", path.display())]
    Checksum {
        /// The file that disappeared or could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Reasons a structural document is rejected.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed YAML, or a shape serde could not map onto the model.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// A file's top-level value is not a mapping.
    #[error("top-level value must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A mapping key is itself a sequence or mapping.
    #[error("mapping keys must be scalars, found {0}")]
    NonStringKey(&'static str),

    /// Two keys of one mapping are equal once stringified, e.g. `1` and `"1"`.
    #[error("duplicate mapping key '{0}'")]
    DuplicateKey(String),

    /// The file is not UTF-8 text.
    #[error("content is not valid UTF-8")]
    NotUtf8,
}

/// Failures while producing the generated source file.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Template compilation or rendering failed.
    #[error("error rendering routes template: {0}")]
    Template(#[from] minijinja::Error),

    /// The output directory or file could not be written.
    #[error("error writing '{}': {source}", path.display())]
    Io {
        /// Directory or file being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The formatter exited unsuccessfully.
    #[error("formatting '{}' failed with {status}", path.display())]
    Format {
        /// The generated file.
        path: PathBuf,
        /// Formatter exit status.
        status: ExitStatus,
    },
}

impl Error {
    pub(crate) fn not_found(path: &Path, source: io::Error) -> Self {
        Error::IncludeNotFound {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(origin: impl Into<String>, source: impl Into<DecodeError>) -> Self {
        Error::Decode {
            origin: origin.into(),
            source: source.into(),
        }
    }
}

impl GenerationError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        GenerationError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
