//! # CLI Module
//!
//! Command-line front end of the `muxc` binary.
//!
//! ## Usage
//!
//! ```bash
//! # Generate once from ./muxc.yaml
//! muxc
//!
//! # Generate from another file and keep regenerating on change
//! muxc -w -f config/muxc.yaml
//!
//! # Inspect what the generator would see
//! muxc -f config/muxc.yaml --print-tree
//! muxc -f config/muxc.yaml --print-merged
//! ```
//!
//! Options:
//! - `-f, --file <FILE>` - Root configuration file (default: `muxc.yaml`)
//! - `-w, --watch` - Poll for changes and regenerate (see [`crate::watch`])
//! - `--print-merged` - Print the merged YAML to stdout; nothing is generated
//! - `--print-tree` - Print the include tree to stdout; nothing is generated
//! - `--rustfmt` - Format the generated file with `rustfmt`
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use muxc::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli};
