use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod check;
mod init;

const BIN_NAME: &str = "intlcheck";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    /// Run `check --format json` and parse stdout.
    pub fn check_json(&self, extra_args: &[&str]) -> Result<(Output, Value)> {
        let output = self
            .check_command()
            .args(["--format", "json"])
            .args(extra_args)
            .output()?;
        let value: Value = serde_json::from_slice(&output.stdout).with_context(|| {
            format!(
                "stdout is not JSON. stderr: {}",
                String::from_utf8_lossy(&output.stderr)
            )
        })?;
        Ok((output, value))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// `(rule, key)` pairs of every diagnostic in a JSON report.
pub fn rules_and_keys(report: &Value) -> Vec<(String, Option<String>)> {
    report["diagnostics"]
        .as_array()
        .map(|diags| {
            diags
                .iter()
                .map(|d| {
                    (
                        d["rule"].as_str().unwrap_or_default().to_string(),
                        d["key"].as_str().map(str::to_string),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
