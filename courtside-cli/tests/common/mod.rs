//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the courtside data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment. The data directory is not created
    /// yet; courtside creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("courtside-data");
        Self { temp_dir, data_dir }
    }

    /// A command with no flags and a clean `COURTSIDE_*` environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("courtside").expect("Failed to find courtside binary");
        for var in [
            "COURTSIDE_DATA_DIR",
            "COURTSIDE_RESERVATION_PRICE",
            "COURTSIDE_MAXIMUM_LOCK_WAIT_SECONDS",
            "COURTSIDE_OUTPUT_FORMAT",
            "COURTSIDE_DISABLE_AUTOINIT",
            "COURTSIDE_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("courtside.db")
    }

    /// Write `contents` as the configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).unwrap();
        std::fs::write(self.data_dir.join("config.yaml"), contents).unwrap();
    }

    /// Add a schedule starting `offset` from now and return its id.
    pub fn add_schedule(&self, offset: Duration) -> i64 {
        let start = (Utc::now() + offset).to_rfc3339();
        let output = self
            .command()
            .args(["add-schedule", "--start", &start])
            .output()
            .unwrap();
        assert!(output.status.success(), "add-schedule failed: {output:?}");
        parse_id(&output.stdout)
    }

    /// Book `schedule` for `guest` and return the reservation id.
    pub fn book(&self, guest: i64, schedule: i64) -> i64 {
        let output = self
            .command()
            .args([
                "book",
                "--guest",
                &guest.to_string(),
                "--schedule",
                &schedule.to_string(),
            ])
            .output()
            .unwrap();
        assert!(output.status.success(), "book failed: {output:?}");
        parse_id(&output.stdout)
    }

    /// Run a command with `--format json` and parse stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success(), "{args:?} failed: {output:?}");
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn parse_id(stdout: &[u8]) -> i64 {
    String::from_utf8_lossy(stdout).trim().parse().unwrap()
}
