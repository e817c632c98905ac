use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment, UndefinedBehavior};
use tracing::info;

use crate::config::Configuration;
use crate::error::GenerationError;

/// Name of the embedded routes template.
pub const ROUTES_TEMPLATE: &str = "routes.rs.txt";

/// File written inside the configured output directory.
pub const OUTPUT_FILE: &str = "routes.rs";

/// Generator version stamped into every header.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Values stamped into the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationMeta {
    /// Generator version.
    pub version: String,
    /// File name of the root configuration.
    pub source_file: String,
}

impl GenerationMeta {
    /// Metadata for a configuration rooted at `config_path`, stamped with this crate's
    /// version.
    #[must_use]
    pub fn for_source(config_path: &Path) -> Self {
        let source_file = config_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            version: VERSION.to_string(),
            source_file,
        }
    }
}

/// Renders a [`Configuration`] into a routes module.
///
/// Each instance owns its own template environment; build one per pipeline.
#[derive(Debug)]
pub struct Generator {
    env: Environment<'static>,
}

impl Generator {
    /// Compile the embedded template and register its helpers.
    pub fn new() -> Result<Self, GenerationError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_function("join", |items: Vec<String>, sep: String| items.join(&sep));
        env.add_function("reverse", |mut items: Vec<String>| {
            items.reverse();
            items
        });
        env.add_function("append", |mut first: Vec<String>, second: Vec<String>| {
            first.extend(second);
            first
        });
        env.add_function("contains", |items: Vec<String>, item: String| {
            items.contains(&item)
        });
        // Debug formatting of a str is a valid Rust string literal.
        env.add_filter("quote", |s: String| format!("{s:?}"));

        env.add_template(
            ROUTES_TEMPLATE,
            include_str!("../../templates/routes.rs.txt"),
        )?;
        Ok(Self { env })
    }

    /// Render the routes module for `cfg`.
    pub fn render(
        &self,
        cfg: &Configuration,
        meta: &GenerationMeta,
    ) -> Result<String, GenerationError> {
        let tmpl = self.env.get_template(ROUTES_TEMPLATE)?;
        let rendered = tmpl.render(context! {
            version => &meta.version,
            source_file => &meta.source_file,
            package => &cfg.package,
            imports => &cfg.imports,
            args => &cfg.args,
            vars => &cfg.vars,
            mux => &cfg.mux,
            routes => &cfg.routes,
        })?;
        Ok(rendered)
    }

    /// Render and write `<base_dir>/<cfg.out>/routes.rs`, replacing any previous file.
    ///
    /// A failed write can leave a partial file behind; callers must regenerate.
    pub fn write(
        &self,
        cfg: &Configuration,
        meta: &GenerationMeta,
        base_dir: &Path,
    ) -> Result<PathBuf, GenerationError> {
        let rendered = self.render(cfg, meta)?;
        let out_dir = base_dir.join(&cfg.out);
        fs::create_dir_all(&out_dir).map_err(|e| GenerationError::io(&out_dir, e))?;
        let path = out_dir.join(OUTPUT_FILE);
        fs::write(&path, rendered).map_err(|e| GenerationError::io(&path, e))?;
        info!(path = %path.display(), routes = cfg.route_count(), "generated routes");
        Ok(path)
    }
}
