// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Command for the `wpt` binary with logging silenced
pub fn wpt() -> Command {
    let mut cmd = Command::cargo_bin("wpt").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Temporary directory holding a settings file
pub struct SettingsFile {
    _dir: TempDir,
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wpt.toml");
        fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

/// Run `wpt` with `args`, require success and parse stdout as JSON
pub fn json(args: &[&str]) -> serde_json::Value {
    let output = wpt().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "wpt {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Messages of the events in a `simulate --format json` document
pub fn event_messages(simulation: &serde_json::Value) -> Vec<String> {
    simulation["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["body"]["message"].as_str().unwrap().to_string())
        .collect()
}
