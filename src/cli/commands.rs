use crate::{
    logging::init_logging,
    pipeline::{Pipeline, PipelineOptions},
    runtime_config::RuntimeConfig,
    watch::Watcher,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Command-line interface for muxc
///
/// Compiles a YAML route configuration (with `!include` directives) into a Rust source
/// file that registers every route on a mux.
#[derive(Debug, Parser)]
#[command(name = "muxc", version)]
#[command(about = "Compile YAML route configuration into mux registration code", long_about = None)]
pub struct Cli {
    /// Path to the root configuration file
    #[arg(short, long, default_value = "muxc.yaml")]
    pub file: PathBuf,

    /// Keep running and regenerate whenever a configuration file changes
    #[arg(short, long, default_value_t = false)]
    pub watch: bool,

    /// Print the merged configuration as YAML instead of generating
    #[arg(long, default_value_t = false, conflicts_with_all = ["watch", "print_tree"])]
    pub print_merged: bool,

    /// Print the resolved include tree instead of generating
    #[arg(long, default_value_t = false, conflicts_with = "watch")]
    pub print_tree: bool,

    /// Run rustfmt on the generated file
    #[arg(long, default_value_t = false)]
    pub rustfmt: bool,
}

impl Cli {
    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            rustfmt: self.rustfmt,
        }
    }
}

/// Parse the process arguments and execute them
///
/// # Errors
///
/// Returns an error if:
/// - Logging cannot be installed
/// - The configuration cannot be resolved, merged or loaded
/// - Code generation or formatting fails
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    run(&cli)
}

/// Execute an already parsed command line
///
/// In watch mode this only returns if the initial setup fails.
pub fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "starting");
    let pipeline = Pipeline::new(&cli.file, cli.options()).context("error preparing generator")?;

    if cli.print_merged {
        let yaml = pipeline
            .merged_yaml()
            .with_context(|| format!("error merging '{}'", cli.file.display()))?;
        io::stdout()
            .write_all(yaml.as_bytes())
            .context("error writing merged configuration")?;
        return Ok(());
    }

    if cli.print_tree {
        let tree = pipeline
            .resolve()
            .with_context(|| format!("error resolving includes of '{}'", cli.file.display()))?;
        print!("{tree}");
        return Ok(());
    }

    if cli.watch {
        let runtime = RuntimeConfig::from_env();
        Watcher::new(pipeline, runtime.poll_interval).run();
    }

    pipeline.run().context("error generating muxc routes")?;
    Ok(())
}
