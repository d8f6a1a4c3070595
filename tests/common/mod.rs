//! Common test utilities for dental scenario and CLI tests.
//!
//! Provides `TestEnv`, an isolated clinic with its own data directory,
//! plus helpers to drive the service API and the compiled binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use dental::{create_clinic_service, ConcreteClinicService};

/// Result of running a dental CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated clinic environment with temp directories.
///
/// The project directory is the working directory for CLI runs; data
/// files live under `data/` inside it. HOME points at a second temp
/// directory so user-level config never leaks into tests.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Path relative to the project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of a file in the default data directory
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.project_path("data").join(file)
    }

    /// Clinic service over this environment's default data directory
    pub fn service(&self) -> ConcreteClinicService {
        create_clinic_service(&self.project_path("data"))
    }

    /// Write a file under the project root
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a data file's content
    pub fn read_data_file(&self, file: &str) -> String {
        let path = self.data_path(file);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read data file {}: {}", path.display(), e))
    }

    /// Run the dental CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the dental CLI with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dental"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("DENTAL_DATA_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute dental");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Timestamp on the canonical test day
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
