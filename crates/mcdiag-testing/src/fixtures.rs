//! Sample launcher logs.
//!
//! The logs live in `crates/mcdiag-engine/tests/fixtures/` so the engine's
//! own tests and the CLI tests read the same files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample log manager for test data.
pub struct SampleLogs {
    samples_dir: PathBuf,
}

impl Default for SampleLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleLogs {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .unwrap()
            .join("mcdiag-engine/tests/fixtures");

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample log to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        fs::copy(&source, dest)
            .with_context(|| format!("Failed to copy sample {}", source.display()))?;
        Ok(())
    }
}
