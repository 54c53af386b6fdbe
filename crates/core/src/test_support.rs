// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    Build, BuildHistory, BuildId, BuildStatus, Cause, ChangeEntry, ChangeSet, UpstreamCause, User,
};
use std::collections::HashMap;
use std::sync::Arc;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for the build data model.
pub mod strategies {
    use crate::build::{BuildId, BuildStatus};
    use proptest::prelude::*;

    pub fn arb_build_status() -> impl Strategy<Value = BuildStatus> {
        prop_oneof![
            Just(BuildStatus::Success),
            Just(BuildStatus::Unstable),
            Just(BuildStatus::Failure),
            Just(BuildStatus::Aborted),
            Just(BuildStatus::NotBuilt),
            Just(BuildStatus::InProgress),
        ]
    }

    /// Statuses that never count as the last success.
    pub fn arb_unsuccessful_status() -> impl Strategy<Value = BuildStatus> {
        arb_build_status().prop_filter("not success", |s| !s.is_success())
    }

    pub fn arb_build_id() -> impl Strategy<Value = BuildId> {
        ("[a-z][a-z0-9-]{0,8}", 1u32..500).prop_map(|(job, number)| BuildId::new(job, number))
    }
}

// ── Factory functions ───────────────────────────────────────────────────

pub fn build_id(job: &str, number: u32) -> BuildId {
    BuildId::new(job, number)
}

/// An upstream cause with no nested causes.
pub fn upstream(job: &str, number: u32) -> Cause {
    Cause::Upstream(UpstreamCause::new(BuildId::new(job, number)))
}

/// An upstream cause whose upstream build was itself caused by `nested`.
pub fn upstream_with(job: &str, number: u32, nested: Vec<Cause>) -> Cause {
    Cause::Upstream(UpstreamCause { upstream: BuildId::new(job, number), upstream_causes: nested })
}

pub fn entry(commit_id: &str, author: &str) -> ChangeEntry {
    ChangeEntry::new(commit_id, User::new(author))
}

/// A git change set with one entry per author, commit ids `c1`, `c2`, ...
pub fn git_changes(authors: &[&str]) -> ChangeSet {
    ChangeSet::new(
        "git",
        authors.iter().enumerate().map(|(i, a)| entry(&format!("c{}", i + 1), a)).collect(),
    )
}

/// Build `job#number` linked to `number - 1` when `number > 1`.
pub fn linked_build(job: &str, number: u32, status: BuildStatus) -> Build {
    let mut build = Build::new(BuildId::new(job, number), status);
    if number > 1 {
        build.previous = Some(number - 1);
    }
    build
}

/// Map-backed history for unit tests that cannot depend on the storage crate.
#[derive(Debug, Default, Clone)]
pub struct MapHistory {
    builds: HashMap<BuildId, Arc<Build>>,
}

impl MapHistory {
    pub fn new(builds: impl IntoIterator<Item = Build>) -> Self {
        Self { builds: builds.into_iter().map(|b| (b.id.clone(), Arc::new(b))).collect() }
    }

    pub fn insert(&mut self, build: Build) {
        self.builds.insert(build.id.clone(), Arc::new(build));
    }

    pub fn get(&self, job: &str, number: u32) -> Option<Arc<Build>> {
        self.builds.get(&BuildId::new(job, number)).cloned()
    }
}

impl BuildHistory for MapHistory {
    fn build(&self, id: &BuildId) -> Option<Arc<Build>> {
        self.builds.get(id).cloned()
    }
}
