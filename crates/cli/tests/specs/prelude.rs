// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a fluent runner around the `culprits` binary and a
//! temporary workspace for snapshot and config files.

use assert_cmd::Command;
use culprits_core::test_support::{git_changes, linked_build, upstream, upstream_with};
use culprits_core::{Build, BuildStatus, Cause};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn cli() -> Cli {
    let mut cmd = Command::cargo_bin("culprits").unwrap();
    cmd.env_remove("CULPRITS_CONFIG")
        .env_remove("CULPRITS_DEBUG")
        .env_remove("CULPRITS_LOG")
        .env("NO_COLOR", "1");
    Cli { cmd }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0.
    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, 0, "expected success\nstderr:\n{}", run.stderr);
        run
    }

    /// Run and require the given non-zero exit code.
    pub fn fails_with(mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, code, "unexpected exit code\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct Run {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Run {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Temporary directory holding snapshot and config files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn snapshot(&self, builds: Vec<Build>) -> String {
        let json = serde_json::json!({ "builds": builds });
        let path = self.file("history.json", &json.to_string());
        path.display().to_string()
    }
}

/// `app#10` succeeded, `app#11` was triggered by `lib#1` (alice), and
/// `app#12` by `api#1` (bob), itself triggered by `lib#1`. `app#12` also
/// carries its own change by carol.
pub fn nested_history() -> Vec<Build> {
    vec![
        with(linked_build("app", 10, BuildStatus::Success), vec![], &[]),
        with(linked_build("app", 11, BuildStatus::Failure), vec![upstream("lib", 1)], &[]),
        with(
            linked_build("app", 12, BuildStatus::Failure),
            vec![upstream_with("api", 1, vec![upstream("lib", 1)])],
            &["carol"],
        ),
        with(linked_build("lib", 1, BuildStatus::Success), vec![], &["alice"]),
        with(linked_build("api", 1, BuildStatus::Success), vec![], &["bob"]),
    ]
}

fn with(mut build: Build, causes: Vec<Cause>, authors: &[&str]) -> Build {
    build.causes = causes;
    if !authors.is_empty() {
        build.change_sets = Some(vec![git_changes(authors)]);
    }
    build
}
