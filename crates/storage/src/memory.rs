// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory build history.

use culprits_core::{Build, BuildHistory, BuildId, JobName};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Build history held in memory.
///
/// Builds are stored behind `Arc` so lookups hand out cheap immutable
/// snapshots. The host may insert or remove builds between runs (log
/// rotation); removed builds simply stop resolving.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    builds: RwLock<HashMap<BuildId, Arc<Build>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a build, replacing any existing build with the same id.
    ///
    /// Returns the replaced build, if any.
    pub fn insert(&self, build: Build) -> Option<Arc<Build>> {
        let id = build.id.clone();
        let replaced = self.builds.write().insert(id.clone(), Arc::new(build));
        if replaced.is_some() {
            tracing::debug!(build = %id, "replaced stored build");
        }
        replaced
    }

    /// Remove a build, as log rotation would.
    pub fn remove(&self, id: &BuildId) -> Option<Arc<Build>> {
        self.builds.write().remove(id)
    }

    pub fn contains(&self, id: &BuildId) -> bool {
        self.builds.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.builds.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.read().is_empty()
    }

    /// The highest-numbered stored build of a job.
    pub fn last_build(&self, job: &JobName) -> Option<Arc<Build>> {
        self.builds
            .read()
            .values()
            .filter(|build| build.job() == job)
            .max_by_key(|build| build.number())
            .cloned()
    }

    /// All stored builds ordered by job then number.
    pub fn builds(&self) -> Vec<Arc<Build>> {
        let mut builds: Vec<_> = self.builds.read().values().cloned().collect();
        builds.sort_by(|a, b| a.id.cmp(&b.id));
        builds
    }
}

impl FromIterator<Build> for MemoryHistory {
    fn from_iter<I: IntoIterator<Item = Build>>(iter: I) -> Self {
        let builds = iter.into_iter().map(|build| (build.id.clone(), Arc::new(build))).collect();
        Self { builds: RwLock::new(builds) }
    }
}

impl BuildHistory for MemoryHistory {
    fn build(&self, id: &BuildId) -> Option<Arc<Build>> {
        self.builds.read().get(id).cloned()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
