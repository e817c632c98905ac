//! # Watch Module
//!
//! Polls the configuration and regenerates when any contributing file changes.
//!
//! ## Change detection
//!
//! Every tick re-resolves the include graph from the root, so files that were added
//! or dropped by an `!include` edit are picked up on the next tick. The composite hash is
//! the concatenation of each file's SHA-256 digest in discovery order. A build only runs
//! when that hash differs from the one recorded by the last successful build.
//!
//! ## Error reporting
//!
//! A failing tick prints its error only when the text differs from the error printed
//! before it, so a broken file does not flood the terminal once per second. A successful
//! or unchanged tick clears the remembered error, so a recurrence is reported again.
//! Errors never stop the loop.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Error, Result};
use crate::include::FileNode;
use crate::pipeline::Pipeline;

/// State carried from one tick to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildState {
    /// Composite hash of the last successful build.
    pub last_hash: Option<String>,
    /// Text of the last reported error.
    pub last_error: Option<String>,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed since the last successful build.
    Unchanged,
    /// The pipeline ran and succeeded.
    Built(Duration),
    /// Some stage failed; `reported` is false when the message was suppressed as a repeat.
    Failed { message: String, reported: bool },
}

/// Polling rebuild loop around a [`Pipeline`].
#[derive(Debug)]
pub struct Watcher {
    pipeline: Pipeline,
    interval: Duration,
    state: BuildState,
}

impl Watcher {
    #[must_use]
    pub fn new(pipeline: Pipeline, interval: Duration) -> Self {
        Self {
            pipeline,
            interval,
            state: BuildState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &BuildState {
        &self.state
    }

    /// Run one iteration, writing progress to `out` and errors to `err`.
    pub fn tick(&mut self, out: &mut impl Write, err: &mut impl Write) -> TickOutcome {
        let outcome = match self.try_tick(out) {
            Ok(outcome) => {
                self.state.last_error = None;
                outcome
            }
            Err(e) => self.report(&e, err),
        };
        debug!(?outcome, "watch tick");
        outcome
    }

    fn try_tick(&mut self, out: &mut impl Write) -> Result<TickOutcome> {
        let tree = self.pipeline.resolve()?;
        let hash = composite_hash(&tree)?;
        if self.state.last_hash.as_deref() == Some(hash.as_str()) {
            return Ok(TickOutcome::Unchanged);
        }

        let started = Instant::now();
        self.pipeline.build(&tree)?;
        let elapsed = started.elapsed();
        self.state.last_hash = Some(hash);
        // progress output is best effort
        drop(writeln!(out, "Built changes in {elapsed:?}"));
        Ok(TickOutcome::Built(elapsed))
    }

    fn report(&mut self, error: &Error, err: &mut impl Write) -> TickOutcome {
        let message = error.to_string();
        let reported = self.state.last_error.as_deref() != Some(message.as_str());
        if reported {
            drop(writeln!(err, "{message}"));
        } else {
            debug!("suppressed repeated error");
        }
        self.state.last_error = Some(message.clone());
        TickOutcome::Failed { message, reported }
    }

    /// Tick forever, sleeping `interval` between ticks.
    pub fn run(&mut self) -> ! {
        println!("watching for file changes...");
        let stdout = io::stdout();
        let stderr = io::stderr();
        loop {
            self.tick(&mut stdout.lock(), &mut stderr.lock());
            thread::sleep(self.interval);
        }
    }
}

/// Concatenated SHA-256 hex digests of every file in the tree, in discovery order.
pub fn composite_hash(tree: &FileNode) -> Result<String> {
    tree.paths()
        .into_iter()
        .map(file_hash)
        .collect::<Result<Vec<_>>>()
        .map(|hashes| hashes.concat())
}

fn file_hash(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Checksum {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Sha256::digest(&bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect())
}
