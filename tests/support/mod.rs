#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use pondo::config::{Config, HOME_ENV};
use pondo::task::Task;
use serde_json::Value;
use tempfile::TempDir;

/// A scratch home directory that pondo is pointed at via `PONDO_HOME`.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    /// A home that has already been through `pondo init`.
    pub fn initialized() -> Self {
        let home = Self::new();
        home.cmd().arg("init").assert().success();
        home
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> Config {
        Config::from_home(self.path())
    }

    pub fn config_dir(&self) -> PathBuf {
        self.config().config_dir
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.config().tasks_file
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = pondo_cmd();
        cmd.env(HOME_ENV, self.path());
        cmd
    }

    pub fn read_tasks(&self) -> Vec<Task> {
        let raw = fs::read_to_string(self.tasks_file()).expect("read tasks file");
        serde_json::from_str(&raw).expect("parse tasks file")
    }

    /// Run `pondo add <name> --json` and return the new task's ID.
    pub fn add(&self, name: &str) -> String {
        let output = self
            .cmd()
            .args(["add", name, "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: Value = serde_json::from_slice(&output).expect("add json");
        value["data"]["id"].as_str().expect("task id").to_string()
    }
}

pub fn pondo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pondo").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd
}
