use std::path::Path;

use tracing::debug;

use super::types::{Configuration, RouteGroup};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::include::resolve_root;
use crate::route_spec::ParsedPath;

const MERGED_ORIGIN: &str = "merged configuration";

impl Configuration {
    /// Build a configuration from a merged document.
    ///
    /// Every route-spec string is parsed; the first failure aborts the whole load.
    pub fn from_document(doc: Document) -> Result<Self> {
        let mut cfg: Configuration = serde_yaml::from_value(doc.into_text_value())
            .map_err(|e| Error::decode(MERGED_ORIGIN, e))?;
        for group in &mut cfg.routes {
            group.parse_paths()?;
        }
        debug!(
            groups = cfg.routes.len(),
            routes = cfg.route_count(),
            "loaded configuration"
        );
        Ok(cfg)
    }

    /// Resolve, merge and load the configuration rooted at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_document(resolve_root(path)?.merged_document()?)
    }

    /// Total number of parsed routes across all groups.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.iter().map(|g| g.parsed_paths.len()).sum()
    }
}

impl RouteGroup {
    fn parse_paths(&mut self) -> Result<()> {
        self.parsed_paths = self
            .paths
            .iter()
            .map(|spec| {
                ParsedPath::parse(spec).map_err(|source| Error::RouteSpec {
                    spec: spec.clone(),
                    source,
                })
            })
            .collect::<Result<_>>()?;
        Ok(())
    }
}
