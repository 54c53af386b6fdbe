// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upstream committers since the last successful build.
//!
//! When a job fails, the culprits are often not in the job itself but in
//! the upstream builds that triggered it. This provider walks the job's
//! history back to its last success, expands the upstream causes of every
//! build in that window, and resolves the authors of every change in the
//! upstream builds it finds.

use crate::committers::add_upstream_committers;
use crate::config::DEFAULT_MAX_CAUSE_DEPTH;
use crate::context::{EnvVars, PublisherContext};
use crate::expand::collect_upstream_builds;
use crate::provider::RecipientProvider;
use crate::recipients::RecipientSets;
use crate::resolve::Resolver;
use crate::window::HistoryWindow;
use culprits_core::Build;
use std::sync::Arc;

/// Notifies committers of upstream builds that triggered the current job
/// since its last successful build.
#[derive(Debug, Clone)]
pub struct UpstreamCommittersSinceLastSuccess<R> {
    resolver: R,
    max_cause_depth: usize,
}

impl<R> UpstreamCommittersSinceLastSuccess<R> {
    pub const SYMBOL: &'static str = "upstreamDevelopersSinceLastSuccess";
    pub const DISPLAY_NAME: &'static str = "Upstream Committers since last success";

    pub fn new(resolver: R) -> Self {
        Self { resolver, max_cause_depth: DEFAULT_MAX_CAUSE_DEPTH }
    }

    /// Bound nested upstream cause depth (at least 1).
    pub fn with_max_cause_depth(mut self, depth: usize) -> Self {
        self.max_cause_depth = depth.max(1);
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Upstream builds that contributed to the current build since its last
    /// success, or `None` when the job has never succeeded.
    pub fn upstream_builds(&self, context: &PublisherContext<'_>) -> Option<Vec<Arc<Build>>> {
        let history = context.history();
        let current = context.build();
        let last_success = history.previous_successful_build(current)?;
        let window = HistoryWindow::since_last_success(history, current, &last_success);
        Some(collect_upstream_builds(history, &window, self.max_cause_depth))
    }
}

impl<R: Resolver> RecipientProvider for UpstreamCommittersSinceLastSuccess<R> {
    fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn add_recipients(
        &self,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        let debug = context.debug();
        let history = context.history();
        let current = context.build();

        let Some(last_success) = history.previous_successful_build(current) else {
            debug.send(format_args!(
                "No previous successful build for job {}#{}, skipping upstream committers since last success.",
                current.job(),
                current.number()
            ));
            return;
        };
        debug.send(format_args!(
            "Sending email to upstream committer(s) since last successful build."
        ));
        debug.send(format_args!(
            "Collecting upstream builds for job {}#{} since last success ({}#{}).",
            current.job(),
            current.number(),
            last_success.job(),
            last_success.number()
        ));

        let window = HistoryWindow::since_last_success(history, current, &last_success);
        let upstream = collect_upstream_builds(history, &window, self.max_cause_depth);
        debug.send(format_args!("Found {} upstream builds in the time window.", upstream.len()));

        let before = recipients.len();
        let mut calls = 0;
        for build in &upstream {
            calls += add_upstream_committers(build, &self.resolver, context, env, recipients);
        }
        tracing::debug!(
            build = %current.id,
            window = window.len(),
            upstream = upstream.len(),
            resolver_calls = calls,
            added = recipients.len() - before,
            "collected upstream committers"
        );
    }
}

#[cfg(test)]
#[path = "upstream_tests.rs"]
mod tests;
