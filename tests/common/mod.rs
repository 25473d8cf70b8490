//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temp directory holding an isolated config file
pub struct TestEnv {
    pub tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.tmp.path().join("config.yaml")
    }

    /// A cupholder command pointed at this environment's config file
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo::cargo_bin!("cupholder"));
        cmd.env_remove("CUPHOLDER_REGION")
            .env_remove("CUPHOLDER_UNIT")
            .env_remove("RUST_LOG")
            .env("CUPHOLDER_CONFIG", self.config_path());
        cmd
    }
}

/// Helper to get a cupholder command with an isolated, empty config
///
/// The returned TempDir must outlive the command.
pub fn cupholder() -> (TestEnv, Command) {
    let env = TestEnv::new();
    let cmd = env.cmd();
    (env, cmd)
}

/// Run `size` and return the printed TSV line (band, cup, label)
pub fn size_tsv(env: &TestEnv, region: &str, unit: &str, underbust: &str, bust: &str) -> String {
    let output = env
        .cmd()
        .args(["size", underbust, bust, "-r", region, "-u", unit, "-f", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
