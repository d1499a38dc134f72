//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    remote_root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".vitals");
        let remote_root = temp_dir.path().join("remote");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&remote_root).expect("Failed to create remote dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            remote_root,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn remote_root(&self) -> &PathBuf {
        &self.remote_root
    }

    /// Write a config pointing at the fixture's remote directory.
    pub fn write_config(&self) {
        let content = format!(
            "encryption_key = \"test-secret\"\n\n[remote]\nroot = {:?}\n",
            self.remote_root
        );
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Write a fixture export file and enable it for `source`.
    pub fn write_source_fixture(&self, source: &str, records_json: &str) -> PathBuf {
        let path = self.data_dir.join(format!("{}_export.json", source));
        fs::write(&path, records_json).expect("Failed to write fixture export");

        let config_path = self.data_dir.join("config.toml");
        let mut content = if config_path.exists() {
            fs::read_to_string(&config_path).expect("Failed to read config")
        } else {
            String::new()
        };
        content.push_str(&format!(
            "\n[sources.{}]\nenabled = true\nfixture = {:?}\n",
            source, path
        ));
        fs::write(&config_path, content).expect("Failed to write config");

        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vitals").expect("Failed to find vitals binary");
        cmd.env("VITALS_PATH", &self.data_dir);
        cmd.env_remove("VITALS_ENCRYPTION_KEY");
        cmd
    }
}
