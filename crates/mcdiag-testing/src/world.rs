//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory with its own data dir, so tests never
//! touch the user's real `config.toml`.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleLogs;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use mcdiag_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.write_log("latest.log", "Java is version 17.0.1, using 64-bit");
///
/// let result = world.run(&["analyze", "latest.log"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleLogs,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".mcdiag");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            samples: SampleLogs::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// `--format plain` is passed up front; a later `--format json` in the
    /// test's own arguments wins.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("MCDIAG_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Write a log file into the temp root and return its absolute path.
    pub fn write_log(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write log");
        path
    }

    /// Copy a shared sample log into the temp root.
    pub fn copy_sample(&self, sample_name: &str) -> Result<PathBuf> {
        let dest = self.temp_dir.path().join(sample_name);
        self.samples.copy_to(sample_name, &dest)?;
        Ok(dest)
    }

    /// Overwrite `config.toml` with raw TOML text.
    pub fn write_raw_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Execute a CLI command and return the result.
    ///
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_`
    /// variables that cargo test sets.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_inner(args, None)
    }

    /// Execute a CLI command with `input` piped to stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        self.run_inner(args, Some(input))
    }

    #[allow(deprecated)]
    fn run_inner(&self, args: &[&str], stdin: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("mcdiag")
            .map_err(|e| anyhow::anyhow!("Failed to find mcdiag binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        if let Some(input) = stdin {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
