//! Common test utilities for dinopark CLI tests.
//!
//! `TestEnv` runs the binary inside a temp directory with HOME, the XDG
//! config dir and every `DINOPARK_*`/`RUST_LOG` variable isolated, so neither
//! the developer's config nor their store leaks into a test.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const ISOLATED_VARS: [&str; 5] = [
    "DINOPARK_STORE",
    "DINOPARK_BASE_LENGTH",
    "DINOPARK_SECURITY_NAMES",
    "DINOPARK_LOG",
    "RUST_LOG",
];

pub struct TestEnv {
    dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default store location (relative store path resolved in the temp dir)
    pub fn store_path(&self) -> PathBuf {
        self.path().join("dinopark-store.toml")
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let home = self.path().join("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dinopark"));
        cmd.current_dir(self.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .args(args);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
