#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated board fixture: its own data directory and an API URL that
/// refuses connections, so tests never touch the network. Whenever local
/// state is seeded, the remote is never consulted anyway.
pub struct TestBoard {
    dir: TempDir,
}

impl TestBoard {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("kanban_tasks_v1.json")
    }

    pub fn theme_file(&self) -> PathBuf {
        self.data_dir().join("kanban_theme_v1")
    }

    /// Write a raw JSON array into the persisted tasks key
    pub fn seed_tasks(&self, json: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.tasks_file(), json).expect("seed tasks");
    }

    pub fn read_tasks(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.tasks_file()).expect("read tasks file");
        serde_json::from_str(&content).expect("parse tasks file")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join(".kanby.toml"), contents).expect("write config");
    }

    /// A kanby command isolated to this fixture
    pub fn kanby(&self) -> Command {
        let mut cmd = Command::cargo_bin("kanby").expect("kanby binary");
        cmd.current_dir(self.dir.path())
            .env("KANBY_DATA_DIR", self.data_dir())
            .env("KANBY_API_URL", "http://127.0.0.1:1/");
        cmd
    }
}
