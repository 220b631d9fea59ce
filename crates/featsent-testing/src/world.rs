//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Placing review/result CSVs and a config file
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative location of the default dataset, as configured out of the box.
pub const DEFAULT_CSV_RELATIVE: &str = "data/processed/noom_google_clean.csv";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use featsent_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_default_csv(fixtures::SAMPLE_REVIEWS_CSV);
///
/// let result = world.run(&["analyze", "--use-default"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// No config file is written; the CLI falls back to defaults, which
    /// resolve the default dataset relative to the working directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let config_path = base_path.join(".featsent").join("config.toml");

        Self {
            cwd: base_path,
            temp_dir,
            config_path,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the temp root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Place the default dataset where the default config expects it.
    pub fn with_default_csv(self, content: &str) -> Self {
        self.write_file(DEFAULT_CSV_RELATIVE, content);
        self
    }

    /// Write a config file used by every command of this world.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `Command::cargo_bin("featsent")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--no-color")
            .env_remove("FEATSENT_CONFIG")
            .env_remove("RUST_LOG");

        cmd.current_dir(&self.cwd);
        cmd
    }

    /// Execute a command using the project's binary and return the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("featsent")
            .map_err(|e| anyhow::anyhow!("Failed to find featsent binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("Command failed: {}", result.stderr);
        }
        result.json()
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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
