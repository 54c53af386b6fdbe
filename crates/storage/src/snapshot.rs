// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON snapshots of a build history.
//!
//! ```json
//! { "builds": [ { "id": { "job": "app", "number": 3 }, "status": "failure", ... } ] }
//! ```

use crate::MemoryHistory;
use culprits_core::{Build, BuildId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or saving a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("build {0} appears more than once in the snapshot")]
    DuplicateBuild(BuildId),
}

/// Serializable form of a build history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub builds: Vec<Build>,
}

impl HistorySnapshot {
    pub fn new(builds: Vec<Build>) -> Self {
        Self { builds }
    }

    /// Parse a snapshot.
    ///
    /// Upstream cause chains nest one JSON level per hop, so the parser's
    /// recursion limit is lifted and the stack grows on demand instead.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let mut json = serde_json::Deserializer::from_str(text);
        json.disable_recursion_limit();
        let snapshot = Self::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        let mut out = Vec::new();
        let mut json = serde_json::Serializer::pretty(&mut out);
        self.serialize(serde_stacker::Serializer::new(&mut json))?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| SnapshotError::Read { path: path.to_path_buf(), source })?;
        let snapshot = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), builds = snapshot.builds.len(), "loaded snapshot");
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let text = self.to_json()?;
        std::fs::write(path, text)
            .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })
    }

    /// Capture every build currently stored in `history`.
    pub fn capture(history: &MemoryHistory) -> Self {
        Self { builds: history.builds().iter().map(|build| (**build).clone()).collect() }
    }

    /// Load the snapshot into a fresh in-memory history.
    ///
    /// Duplicate build ids are rejected rather than silently replaced.
    pub fn into_history(self) -> Result<MemoryHistory, SnapshotError> {
        let mut seen = HashSet::new();
        for build in &self.builds {
            if !seen.insert(&build.id) {
                return Err(SnapshotError::DuplicateBuild(build.id.clone()));
            }
        }
        Ok(self.builds.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
