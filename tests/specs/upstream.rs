// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upstream committers since last success, end to end.

use crate::prelude::*;

const CONFIG: &str = r#"
[debug]
enabled = true

[resolver]
default_suffix = "@corp.example"
excluded_users = ["release-bot"]

[users]
alice = "alice@lib.example"
"#;

/// app#10 succeeded; app#11 and app#12 failed after upstream builds.
fn scenario() -> Vec<Build> {
    vec![
        build("app", 10, BuildStatus::Success, vec![upstream("lib", 0)], &[]),
        build("app", 11, BuildStatus::Failure, vec![upstream("lib", 1)], &[]),
        build(
            "app",
            12,
            BuildStatus::Unstable,
            vec![upstream_with("api", 4, vec![upstream("lib", 1)])],
            &["carol"],
        ),
        build("lib", 0, BuildStatus::Success, vec![], &["stale"]),
        build("lib", 1, BuildStatus::Success, vec![], &["alice", "release-bot"]),
        build("api", 4, BuildStatus::Success, vec![], &["bob", "alice"]),
    ]
}

#[test]
fn collects_upstream_committers_from_snapshot() {
    let file = SnapshotFile::write(scenario());
    let collected = collect(&file.history(), &config(CONFIG), UPSTREAM, "app", 12);

    assert_eq!(
        collected.addresses(RecipientKind::To),
        vec!["alice@lib.example", "bob@corp.example"]
    );
    assert!(collected.addresses(RecipientKind::Cc).is_empty());
}

#[test]
fn diagnostics_follow_collection() {
    let file = SnapshotFile::write(scenario());
    let collected = collect(&file.history(), &config(CONFIG), UPSTREAM, "app", 12);

    similar_asserts::assert_eq!(
        collected.debug,
        vec![
            "Sending email to upstream committer(s) since last successful build.".to_string(),
            "Collecting upstream builds for job app#12 since last success (app#10).".to_string(),
            "Found 2 upstream builds in the time window.".to_string(),
            "Adding upstream committer from job api with build number 4".to_string(),
            "Adding upstream committer from job lib with build number 1".to_string(),
            "User release-bot is excluded from notifications".to_string(),
        ]
    );
}

#[test]
fn builds_before_last_success_do_not_contribute() {
    let file = SnapshotFile::write(scenario());
    let collected = collect(&file.history(), &config(CONFIG), UPSTREAM, "app", 11);
    assert_eq!(collected.addresses(RecipientKind::To), vec!["alice@lib.example"]);
}

#[test]
fn job_that_never_succeeded_has_no_recipients() {
    let file = SnapshotFile::write(vec![
        build("app", 1, BuildStatus::Failure, vec![upstream("lib", 1)], &[]),
        build("app", 2, BuildStatus::Failure, vec![upstream("lib", 1)], &[]),
        build("lib", 1, BuildStatus::Success, vec![], &["alice"]),
    ]);
    let collected = collect(&file.history(), &config(CONFIG), UPSTREAM, "app", 2);
    assert!(collected.recipients.is_empty());
    assert_eq!(collected.debug.len(), 1);
}

#[test]
fn deleted_upstream_build_is_skipped() {
    let mut builds = scenario();
    builds.retain(|b| b.id != BuildId::new("api", 4));
    let file = SnapshotFile::write(builds);
    let collected = collect(&file.history(), &config(CONFIG), UPSTREAM, "app", 12);

    // lib#1 is still reached directly through app#11
    assert_eq!(collected.addresses(RecipientKind::To), vec!["alice@lib.example"]);
}

#[test]
fn deep_chains_are_bounded_by_config() {
    let mut builds = vec![build("app", 1, BuildStatus::Success, vec![], &[])];
    let mut cause = upstream("up", 0);
    builds.push(build("up", 0, BuildStatus::Success, vec![], &["root"]));
    for n in 1..10 {
        let author = format!("dev{n}");
        builds.push(build("up", n, BuildStatus::Success, vec![], &[author.as_str()]));
        cause = upstream_with("up", n, vec![cause]);
    }
    builds.push(build("app", 2, BuildStatus::Failure, vec![cause], &[]));
    let file = SnapshotFile::write(builds);

    let bounded = config("[expansion]\nmax_cause_depth = 3\n[resolver]\ndefault_suffix = \"@x.org\"\n");
    let collected = collect(&file.history(), &bounded, UPSTREAM, "app", 2);
    assert_eq!(
        collected.addresses(RecipientKind::To),
        vec!["dev7@x.org", "dev8@x.org", "dev9@x.org"]
    );

    let unbounded = config("[resolver]\ndefault_suffix = \"@x.org\"\n");
    let collected = collect(&file.history(), &unbounded, UPSTREAM, "app", 2);
    assert_eq!(collected.recipients.len(), 10);
}

#[test]
fn developers_uses_current_build_only() {
    let file = SnapshotFile::write(scenario());
    let collected = collect(&file.history(), &config(CONFIG), "developers", "app", 12);
    assert_eq!(collected.addresses(RecipientKind::To), vec!["carol@corp.example"]);
    assert_eq!(collected.debug, vec!["Sending email to developers.".to_string()]);
}

#[test]
fn chain_deeper_than_default_bound_loads_and_truncates() {
    let depth = DEFAULT_MAX_CAUSE_DEPTH as u32 + 10;
    let mut builds = vec![build("app", 1, BuildStatus::Success, vec![], &[])];
    let mut cause = upstream("up", 0);
    builds.push(build("up", 0, BuildStatus::Success, vec![], &["dev0"]));
    for n in 1..depth {
        let author = format!("dev{n}");
        builds.push(build("up", n, BuildStatus::Success, vec![], &[author.as_str()]));
        cause = upstream_with("up", n, vec![cause]);
    }
    builds.push(build("app", 2, BuildStatus::Failure, vec![cause], &[]));
    let file = SnapshotFile::write(builds);

    let collected =
        collect(&file.history(), &config("[resolver]\ndefault_suffix = \"@x.org\"\n"), UPSTREAM, "app", 2);
    assert_eq!(collected.recipients.len(), DEFAULT_MAX_CAUSE_DEPTH);
    assert!(collected.addresses(RecipientKind::To).contains(&format!("dev{}@x.org", depth - 1)));
    assert!(!collected.addresses(RecipientKind::To).contains(&"dev0@x.org".to_string()));
}
