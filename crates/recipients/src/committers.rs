// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Committer extraction from a build's change sets.

use crate::context::{EnvVars, PublisherContext};
use crate::recipients::RecipientSets;
use crate::resolve::Resolver;
use culprits_core::Build;

/// Hand the author of every change entry in `build` to `resolver`.
///
/// Change sets and entries are visited in recorded order. Every entry
/// produces one resolver call, even when the author repeats; address
/// deduplication happens in the recipient sets. Builds without change-set
/// support contribute nothing. Returns the number of resolver calls.
pub fn add_committers<R: Resolver + ?Sized>(
    build: &Build,
    resolver: &R,
    context: &PublisherContext<'_>,
    env: &EnvVars,
    recipients: &mut RecipientSets,
) -> usize {
    let Some(change_sets) = build.change_sets() else {
        tracing::debug!(build = %build.id, "build has no change set support");
        return 0;
    };
    let mut calls = 0;
    for change_set in change_sets {
        for entry in change_set {
            resolver.resolve(&entry.author, context, env, recipients);
            calls += 1;
        }
    }
    calls
}

/// [`add_committers`] for one discovered upstream build, with the
/// per-build diagnostic line.
pub fn add_upstream_committers<R: Resolver + ?Sized>(
    build: &Build,
    resolver: &R,
    context: &PublisherContext<'_>,
    env: &EnvVars,
    recipients: &mut RecipientSets,
) -> usize {
    context.debug().send(format_args!(
        "Adding upstream committer from job {} with build number {}",
        build.display_name(),
        build.number()
    ));
    add_committers(build, resolver, context, env, recipients)
}

#[cfg(test)]
#[path = "committers_tests.rs"]
mod tests;
