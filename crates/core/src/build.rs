// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build identity, status, and the immutable build record.

use crate::cause::{Cause, UpstreamCause};
use crate::change::ChangeSet;
use crate::id::JobName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of one build: the job it belongs to and its sequential number.
///
/// Two builds are the same build iff their ids are equal, regardless of
/// which cause path led to them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildId {
    pub job: JobName,
    pub number: u32,
}

impl BuildId {
    pub fn new(job: impl Into<JobName>, number: u32) -> Self {
        Self { job: job.into(), number }
    }

    /// Id of another build of the same job.
    pub fn with_number(&self, number: u32) -> Self {
        Self { job: self.job.clone(), number }
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.job, self.number)
    }
}

/// Errors from parsing a `job#number` build reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildIdParseError {
    #[error("build reference '{0}' is missing '#<number>'")]
    MissingNumber(String),
    #[error("build reference '{0}' has an empty job name")]
    EmptyJob(String),
    #[error("build reference '{0}' has an invalid build number")]
    InvalidNumber(String),
}

impl FromStr for BuildId {
    type Err = BuildIdParseError;

    /// Parse `job#number`. The job part may itself contain `#`; the number
    /// is taken after the last one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (job, number) =
            s.rsplit_once('#').ok_or_else(|| BuildIdParseError::MissingNumber(s.to_string()))?;
        if job.is_empty() {
            return Err(BuildIdParseError::EmptyJob(s.to_string()));
        }
        let number =
            number.parse::<u32>().map_err(|_| BuildIdParseError::InvalidNumber(s.to_string()))?;
        Ok(Self::new(job, number))
    }
}

/// Outcome of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Success,
    /// Completed with test failures or similar soft errors
    Unstable,
    Failure,
    Aborted,
    NotBuilt,
    /// Still running (the build being post-processed is usually in this state)
    InProgress,
}

impl BuildStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }
}

crate::simple_display! {
    BuildStatus {
        Success => "success",
        Unstable => "unstable",
        Failure => "failure",
        Aborted => "aborted",
        NotBuilt => "not_built",
        InProgress => "in_progress",
    }
}

/// A completed (or completing) build as recorded by the build host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    /// Human readable job name, when it differs from the job name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub status: BuildStatus,
    /// Number of the immediately preceding build of the same job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<u32>,
    #[serde(default)]
    pub causes: Vec<Cause>,
    /// Version-control changes; `None` when the build has no SCM support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_sets: Option<Vec<ChangeSet>>,
}

impl Build {
    pub fn new(id: BuildId, status: BuildStatus) -> Self {
        Self { id, display_name: None, status, previous: None, causes: Vec::new(), change_sets: None }
    }

    pub fn job(&self) -> &JobName {
        &self.id.job
    }

    pub fn number(&self) -> u32 {
        self.id.number
    }

    /// Job display name, falling back to the job name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.job.as_str())
    }

    pub fn is_successful(&self) -> bool {
        self.status.is_success()
    }

    /// Id of the preceding build of the same job, if one was recorded.
    pub fn previous_id(&self) -> Option<BuildId> {
        self.previous.map(|number| self.id.with_number(number))
    }

    /// Upstream causes attached directly to this build, in recorded order.
    pub fn upstream_causes(&self) -> impl Iterator<Item = &UpstreamCause> {
        self.causes.iter().filter_map(Cause::as_upstream)
    }

    /// Change sets in recorded order, or `None` without SCM support.
    pub fn change_sets(&self) -> Option<&[ChangeSet]> {
        self.change_sets.as_deref()
    }
}

crate::builder! {
    pub struct BuildBuilder => Build {
        set {
            id: BuildId = BuildId::new("test-job", 1),
            status: BuildStatus = BuildStatus::Success,
            causes: Vec<Cause> = Vec::new(),
        }
        option {
            display_name: String = None,
            previous: u32 = None,
            change_sets: Vec<ChangeSet> = None,
        }
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
