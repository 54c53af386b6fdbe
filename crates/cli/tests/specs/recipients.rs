// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `culprits recipients`

use crate::prelude::*;
use culprits_core::test_support::linked_build;
use culprits_core::BuildStatus;

const CONFIG: &str = r#"
[resolver]
default_suffix = "@corp.example"

[users]
alice = "alice@lib.example, cc:lib-leads@lib.example"
"#;

fn recipients(workspace: &Workspace, build: &str) -> Cli {
    let snapshot = workspace.snapshot(nested_history());
    let config = workspace.file("culprits.toml", CONFIG);
    cli().args(&[
        "recipients",
        "--snapshot",
        &snapshot,
        "--config",
        &config.display().to_string(),
        "--job",
        "app",
        "--build",
        build,
    ])
}

#[test]
fn upstream_committers_since_last_success() {
    let workspace = Workspace::new();
    recipients(&workspace, "12").passes().stdout_eq(
        "to: alice@lib.example\n\
         to: bob@corp.example\n\
         cc: lib-leads@lib.example\n",
    );
}

#[test]
fn developers_provider() {
    let workspace = Workspace::new();
    recipients(&workspace, "12")
        .args(&["--provider", "developers"])
        .passes()
        .stdout_eq("to: carol@corp.example\n");
}

#[test]
fn json_report() {
    let workspace = Workspace::new();
    let run = recipients(&workspace, "12").args(&["--format", "json"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "build": "app#12",
            "provider": "upstreamDevelopersSinceLastSuccess",
            "to": ["alice@lib.example", "bob@corp.example"],
            "cc": ["lib-leads@lib.example"],
            "bcc": [],
        })
    );
}

#[test]
fn debug_lines_go_to_stderr() {
    let workspace = Workspace::new();
    recipients(&workspace, "12")
        .args(&["--debug"])
        .passes()
        .stderr_has("Sending email to upstream committer(s) since last successful build.")
        .stderr_has("Collecting upstream builds for job app#12 since last success (app#10).")
        .stderr_has("Found 2 upstream builds in the time window.")
        .stderr_has("Adding upstream committer from job lib with build number 1");
}

#[test]
fn debug_forced_by_env() {
    let workspace = Workspace::new();
    recipients(&workspace, "12")
        .env("CULPRITS_DEBUG", "1")
        .passes()
        .stderr_has("Found 2 upstream builds in the time window.");
}

#[test]
fn no_debug_lines_by_default() {
    let workspace = Workspace::new();
    let run = recipients(&workspace, "12").passes();
    assert!(!run.stderr.contains("Found 2 upstream builds"), "stderr:\n{}", run.stderr);
}

#[test]
fn last_success_build_itself_has_no_window() {
    let workspace = Workspace::new();
    // app#10 has no earlier success, so nothing is collected
    recipients(&workspace, "10")
        .args(&["--debug"])
        .passes()
        .stdout_eq("")
        .stderr_has("No previous successful build for job app#10");
}

#[test]
fn env_vars_expand_addresses() {
    let workspace = Workspace::new();
    let snapshot = workspace.snapshot(nested_history());
    let config = workspace.file("culprits.toml", "[users]\nalice = \"alice@${MAIL_DOMAIN}\"\n");
    cli()
        .args(&[
            "recipients",
            "--snapshot",
            &snapshot,
            "--config",
            &config.display().to_string(),
            "--job",
            "app",
            "--build",
            "11",
            "--env",
            "MAIL_DOMAIN=lib.example",
        ])
        .passes()
        .stdout_eq("to: alice@lib.example\n");
}

#[test]
fn config_from_env_var() {
    let workspace = Workspace::new();
    let snapshot = workspace.snapshot(nested_history());
    let config = workspace.file("env.toml", "[resolver]\ndefault_suffix = \"@env.example\"\n");
    cli()
        .env("CULPRITS_CONFIG", &config.display().to_string())
        .args(&["recipients", "--snapshot", &snapshot, "--job", "app", "--build", "11"])
        .passes()
        .stdout_eq("to: alice@env.example\n");
}

#[test]
fn unknown_build_exits_2() {
    let workspace = Workspace::new();
    recipients(&workspace, "99").fails_with(2).stderr_has("build app#99 not found");
}

#[test]
fn unknown_provider_exits_2() {
    let workspace = Workspace::new();
    recipients(&workspace, "12")
        .args(&["--provider", "culprits"])
        .fails_with(2)
        .stderr_has("unknown provider 'culprits'");
}

#[test]
fn missing_snapshot_exits_1() {
    let workspace = Workspace::new();
    let missing = workspace.file("placeholder", "");
    let missing = missing.with_file_name("absent.json");
    cli()
        .args(&["recipients", "--snapshot", &missing.display().to_string(), "--job", "a", "--build", "1"])
        .fails_with(1)
        .stderr_has("failed to read snapshot");
}

#[test]
fn duplicate_builds_rejected() {
    let workspace = Workspace::new();
    let snapshot = workspace.snapshot(vec![
        linked_build("app", 1, BuildStatus::Success),
        linked_build("app", 1, BuildStatus::Failure),
    ]);
    cli()
        .args(&["recipients", "--snapshot", &snapshot, "--job", "app", "--build", "1"])
        .fails_with(1)
        .stderr_has("appears more than once");
}
