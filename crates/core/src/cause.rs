// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build causes.
//!
//! Every build records why it ran. An [`UpstreamCause`] names the build whose
//! completion triggered it, together with that build's own causes, so a chain
//! of upstream causes describes the trigger events that led here. The chain is
//! a causation record and may name the same build along several paths.

use crate::build::BuildId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a build started.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cause {
    /// Triggered by the completion of another build
    Upstream(UpstreamCause),
    /// Started manually
    User {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<String>,
    },
    /// Started by a schedule
    Timer,
    /// Started by SCM polling or a push hook
    ScmChange,
    /// Started through the remote trigger API
    Remote {
        addr: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Other { description: String },
}

impl Cause {
    pub fn upstream(cause: UpstreamCause) -> Self {
        Cause::Upstream(cause)
    }

    pub fn as_upstream(&self) -> Option<&UpstreamCause> {
        match self {
            Cause::Upstream(upstream) => Some(upstream),
            _ => None,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Upstream(upstream) => write!(f, "{upstream}"),
            Cause::User { user_id: Some(user) } => write!(f, "Started by user {user}"),
            Cause::User { user_id: None } => f.write_str("Started by an anonymous user"),
            Cause::Timer => f.write_str("Started by timer"),
            Cause::ScmChange => f.write_str("Started by an SCM change"),
            Cause::Remote { addr, note: Some(note) } => {
                write!(f, "Started by remote host {addr} with note: {note}")
            }
            Cause::Remote { addr, note: None } => write!(f, "Started by remote host {addr}"),
            Cause::Other { description } => f.write_str(description),
        }
    }
}

/// A build was triggered by another build's completion.
///
/// `upstream` is recorded by id only; the build it names may have been
/// deleted since, which callers must treat as "no such build".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpstreamCause {
    pub upstream: BuildId,
    /// Causes of the upstream build, captured when this cause was created
    #[serde(default)]
    pub upstream_causes: Vec<Cause>,
}

impl UpstreamCause {
    pub fn new(upstream: BuildId) -> Self {
        Self { upstream, upstream_causes: Vec::new() }
    }

    /// Append a nested cause of the upstream build.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.upstream_causes.push(cause);
        self
    }

    /// Nested upstream causes in recorded order; other kinds are skipped.
    pub fn nested_upstream(&self) -> impl Iterator<Item = &UpstreamCause> {
        self.upstream_causes.iter().filter_map(Cause::as_upstream)
    }
}

impl fmt::Display for UpstreamCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Started by upstream project \"{}\" build number {}",
            self.upstream.job, self.upstream.number
        )
    }
}

impl From<UpstreamCause> for Cause {
    fn from(cause: UpstreamCause) -> Self {
        Cause::Upstream(cause)
    }
}

#[cfg(test)]
#[path = "cause_tests.rs"]
mod tests;
