// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transitive expansion of upstream causes into upstream builds.

use crate::window::HistoryWindow;
use culprits_core::{Build, BuildHistory, BuildId, UpstreamCause};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Collects every build reachable through a chain of upstream causes.
///
/// Builds are keyed by id, so a build named along several cause paths is
/// collected once. Causes are tracked by value together with the shallowest
/// depth they were expanded at; a cause seen again at the same or greater
/// depth is not expanded a second time. Chains deeper than `max_depth` are
/// truncated.
pub struct UpstreamExpander<'h, 'c> {
    history: &'h dyn BuildHistory,
    max_depth: usize,
    expanded: HashMap<&'c UpstreamCause, usize>,
    builds: BTreeMap<BuildId, Arc<Build>>,
    truncated: usize,
}

impl<'h, 'c> UpstreamExpander<'h, 'c> {
    pub fn new(history: &'h dyn BuildHistory, max_depth: usize) -> Self {
        Self {
            history,
            max_depth,
            expanded: HashMap::new(),
            builds: BTreeMap::new(),
            truncated: 0,
        }
    }

    /// Add the build named by `cause` and, transitively, by its nested
    /// upstream causes.
    pub fn expand(&mut self, cause: &'c UpstreamCause) {
        self.expand_at(cause, 0);
    }

    fn expand_at(&mut self, cause: &'c UpstreamCause, depth: usize) {
        if depth >= self.max_depth {
            self.truncated += 1;
            tracing::warn!(
                upstream = %cause.upstream,
                depth,
                "upstream cause chain exceeds max depth, truncating"
            );
            return;
        }
        if self.expanded.get(cause).is_some_and(|&seen| seen <= depth) {
            return;
        }
        self.expanded.insert(cause, depth);

        // A deleted upstream build ends this branch; its recorded causes are
        // not followed either.
        let Some(build) = self.history.build(&cause.upstream) else {
            tracing::debug!(upstream = %cause.upstream, "upstream build no longer available");
            return;
        };
        self.builds.entry(build.id.clone()).or_insert(build);

        for nested in cause.nested_upstream() {
            self.expand_at(nested, depth + 1);
        }
    }

    /// Number of discovered builds so far
    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// Number of branches cut off by the depth bound
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    pub fn contains(&self, id: &BuildId) -> bool {
        self.builds.contains_key(id)
    }

    /// Discovered builds ordered by id.
    pub fn into_builds(self) -> Vec<Arc<Build>> {
        self.builds.into_values().collect()
    }
}

/// Expand every upstream cause in `window` into one deduplicated list of
/// upstream builds, ordered by id.
pub fn collect_upstream_builds(
    history: &dyn BuildHistory,
    window: &HistoryWindow,
    max_depth: usize,
) -> Vec<Arc<Build>> {
    let mut expander = UpstreamExpander::new(history, max_depth);
    for cause in window.upstream_causes() {
        expander.expand(cause);
    }
    if expander.truncated() > 0 {
        tracing::warn!(truncated = expander.truncated(), max_depth, "truncated upstream cause chains");
    }
    expander.into_builds()
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
