//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated config, state and cache directories
//! - Placing the sample corpus sources, a config file or a recent list
//! - Executing CLI commands with those directories

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

const ISOLATED_VARS: [&str; 4] = [
    "EMOKBD_CONFIG_DIR",
    "EMOKBD_STATE_DIR",
    "EMOKBD_CACHE_DIR",
    "EMOKBD_DEV",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use emokbd_testing::TestWorld;
///
/// let world = TestWorld::new().with_sources();
///
/// let result = world.run(&["search", "monkey"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_dir: PathBuf,
    state_dir: PathBuf,
    cache_dir: PathBuf,
    env_vars: HashMap<String, String>,
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
        let base_path = temp_dir.path().to_path_buf();
        let config_dir = base_path.join("config");
        let state_dir = base_path.join("state");
        let cache_dir = base_path.join("cache");

        for dir in [&config_dir, &state_dir, &cache_dir] {
            std::fs::create_dir_all(dir).expect("Failed to create test dir");
        }

        Self {
            temp_dir,
            config_dir,
            state_dir,
            cache_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Place the sample emojibase and UnicodeData files in the cache dir.
    pub fn with_sources(self) -> Self {
        fixtures::write_sources(&self.cache_dir).expect("Failed to write sample sources");
        self
    }

    /// Write `emokbd.toml` into the config dir.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_dir.join("emokbd.toml"), toml)
            .expect("Failed to write config");
        self
    }

    /// Write `recent.txt` into the state dir.
    pub fn with_recent(self, records: &str) -> Self {
        std::fs::write(self.state_dir.join("recent.txt"), records)
            .expect("Failed to write recent list");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read a file below the temp root.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.temp_dir.path().join(relative))?)
    }

    /// Configure a CLI command with this test environment's directories.
    ///
    /// Directory variables of the calling environment are removed so they
    /// cannot leak into the run.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }

        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--state-dir")
            .arg(&self.state_dir)
            .arg("--cache-dir")
            .arg(&self.cache_dir);

        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("emokbd")
            .map_err(|e| anyhow::anyhow!("Failed to find emokbd binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
