//! Persistence of the run-wide counters between runs.
//!
//! The counters live in a small plain-text file, `data_config.txt`, in
//! the dataset directory: `num_models=<m>;num_nodes=<n>`. A missing file
//! is materialized with defaults; a partially corrupt file loses only
//! the malformed pairs, not the whole read.

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

const COUNTER_FILE_NAME: &str = "data_config.txt";

/// The run-wide counters: how many models and nodes every previous run
/// has produced. Passed into the generator explicitly and written back by
/// the caller, so there is no hidden cross-run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    pub num_models: u64,
    pub num_nodes: u64,
}

/// File-backed store for [`RunCounters`].
#[derive(Debug, Clone)]
pub struct RunConfigFile {
    path: PathBuf,
}

impl RunConfigFile {
    pub fn new(dataset_dir: &Path) -> Self {
        Self {
            path: dataset_dir.join(COUNTER_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the counters, creating the file with defaults if absent.
    ///
    /// Any other I/O failure propagates; silently resetting counters on,
    /// say, a permission error would renumber the whole dataset.
    pub fn read(&self) -> Result<RunCounters, GeneratorError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "counter file {} not found, starting from defaults",
                    self.path.display()
                );
                let defaults = RunCounters::default();
                self.write(&defaults)?;
                Ok(defaults)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses `key=value` pairs joined by `;`. Malformed pairs are
    /// skipped with a warning; unknown keys are ignored.
    fn parse(content: &str) -> RunCounters {
        let mut counters = RunCounters::default();
        for pair in content.trim().split(';') {
            if pair.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = pair.split_once('=') else {
                warn!("skipping malformed counter pair '{pair}'");
                continue;
            };
            match value.trim().parse::<u64>() {
                Ok(value) => match key.trim() {
                    "num_models" => counters.num_models = value,
                    "num_nodes" => counters.num_nodes = value,
                    unknown => warn!("ignoring unknown counter '{unknown}'"),
                },
                Err(e) => warn!("skipping malformed counter pair '{pair}': {e}"),
            }
        }
        counters
    }

    pub fn write(&self, counters: &RunCounters) -> Result<(), GeneratorError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(
            &self.path,
            format!(
                "num_models={};num_nodes={}",
                counters.num_models, counters.num_nodes
            ),
        )?;
        Ok(())
    }
}
