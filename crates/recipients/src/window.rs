// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A job's own builds since its last success.

use culprits_core::{Build, BuildHistory, UpstreamCause};
use std::collections::HashSet;
use std::sync::Arc;

/// Builds of the current job in the range (last success, current], newest
/// first.
///
/// The last successful build itself is excluded: its causes explain the
/// last success, not what changed since.
#[derive(Debug, Clone, Default)]
pub struct HistoryWindow {
    builds: Vec<Arc<Build>>,
}

impl HistoryWindow {
    /// Walk previous-build links from `current` until `last_success` is
    /// reached or history runs out.
    pub fn since_last_success(
        history: &dyn BuildHistory,
        current: &Arc<Build>,
        last_success: &Build,
    ) -> Self {
        let mut builds = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(Arc::clone(current));
        while let Some(build) = cursor {
            if build.id == last_success.id {
                break;
            }
            if !seen.insert(build.id.clone()) {
                tracing::warn!(build = %build.id, "previous-build links form a loop, stopping walk");
                break;
            }
            cursor = history.previous_build(&build);
            builds.push(build);
        }
        tracing::debug!(
            current = %current.id,
            last_success = %last_success.id,
            builds = builds.len(),
            "walked build history"
        );
        Self { builds }
    }

    pub fn builds(&self) -> &[Arc<Build>] {
        &self.builds
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// Upstream causes attached to builds in the window. Other cause kinds
    /// carry no committer information and are skipped.
    pub fn upstream_causes(&self) -> impl Iterator<Item = &UpstreamCause> {
        self.builds.iter().flat_map(|build| build.upstream_causes())
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
