//! # muxc
//!
//! **muxc** compiles a declarative YAML route configuration into a Rust source file that
//! registers every route, wrapped in its middleware chain, on a user-supplied mux.
//!
//! ## Overview
//!
//! A configuration is a root YAML file that may pull in other files with line-level
//! `!include "path.yaml"` directives. muxc resolves the include tree, merges every file
//! into one document, decodes it into a [`Configuration`], parses the compact route strings
//! (`"GET /pet/{id} ; handlers::get_pet ; auth, json"`) and renders `routes.rs`.
//!
//! ## Architecture
//!
//! - **[`include`]** - Include directive resolution with cycle detection
//! - **[`document`]** - Tagged YAML document tree and the structural merge
//! - **[`route_spec`]** - Parser for `METHOD PATTERN ; HANDLER ; MIDDLEWARES` strings
//! - **[`config`]** - Typed configuration decoded from the merged document
//! - **[`generator`]** - minijinja-based code generator and optional `rustfmt` pass
//! - **[`pipeline`]** - One build: resolve, merge, load, generate
//! - **[`watch`]** - Polling rebuild loop with content hashing and error dedup
//! - **[`cli`]** - The `muxc` command line
//! - **[`logging`]** / **[`runtime_config`]** - Environment-driven settings
//!
//! ### Build Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(muxc)
//!     participant Inc as include::resolve_root
//!     participant Doc as Document::merge
//!     participant Cfg as Configuration::from_document
//!     participant Gen as Generator::write
//!     participant FS as File System
//!
//!     CLI->>Inc: resolve_root("muxc.yaml")
//!     Inc->>FS: read root + every !include
//!     Inc-->>CLI: FileNode tree
//!     CLI->>Doc: merged_document()
//!     Doc-->>CLI: Document
//!     CLI->>Cfg: from_document(doc)
//!     Cfg->>Cfg: ParsedPath::parse for each path
//!     Cfg-->>CLI: Configuration
//!     CLI->>Gen: write(cfg, meta, base_dir)
//!     Gen->>FS: <out>/routes.rs
//! ```
//!
//! ### Merge Rules
//!
//! Included files are merged first, in directive order, and the including file is merged
//! last. Mappings merge key by key, sequences concatenate, and any other pairing is
//! replaced by the later value. So a parent's scalars win over its includes, while list
//! items from includes come before the parent's own.
//!
//! ## Quick Start
//!
//! ```no_run
//! use muxc::{Pipeline, PipelineOptions};
//!
//! let pipeline = Pipeline::new("config/muxc.yaml", PipelineOptions::default())?;
//! let written = pipeline.run()?;
//! println!("wrote {}", written.display());
//! # Ok::<(), muxc::Error>(())
//! ```
//!
//! ## Generated Code
//!
//! ```text
//! // Code generated by muxc. DO NOT EDIT.
//! // versions:
//! //   muxc v1.0.0
//! // source: muxc.yaml
//!
//! use crate::handlers;
//!
//! /// Registers every configured route on `mux`.
//! pub fn configure_mux(mux: &mut Mux, ctrl: &Controller) {
//!     let json = middlewares::json();
//!
//!     // handlers::list_pets(ctrl) <- json <- logger
//!     mux.handle(
//!         "GET /api/v1/pet",
//!         logger(json(handlers::list_pets(ctrl))),
//!     );
//! }
//! ```
//!
//! Identifiers (handlers, middlewares, imports, arg types) are copied verbatim; muxc never
//! checks that they exist.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod include;
pub mod logging;
pub mod pipeline;
pub mod route_spec;
pub mod runtime_config;
pub mod watch;

pub use config::{Configuration, RouteGroup};
pub use document::{Document, Mapping, Scalar};
pub use error::{DecodeError, Error, GenerationError, Result};
pub use generator::{format_output, GenerationMeta, Generator};
pub use include::{resolve_root, FileNode};
pub use pipeline::{merge_files, Pipeline, PipelineOptions};
pub use route_spec::{ParsedPath, RouteSpecError};
pub use watch::{composite_hash, BuildState, TickOutcome, Watcher};
