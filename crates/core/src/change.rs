// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-control change sets recorded on a build.

use crate::id::UserId;
use serde::{Deserialize, Serialize};

/// A user known to the build host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into(), full_name: None }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Full name if known, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// One commit included in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub commit_id: String,
    pub author: User,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

impl ChangeEntry {
    pub fn new(commit_id: impl Into<String>, author: User) -> Self {
        Self { commit_id: commit_id.into(), author, message: String::new(), paths: Vec::new() }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Commits from one checkout, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// SCM kind, e.g. `git`
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub entries: Vec<ChangeEntry>,
}

impl ChangeSet {
    pub fn new(kind: impl Into<String>, entries: Vec<ChangeEntry>) -> Self {
        Self { kind: kind.into(), entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeEntry> {
        self.entries.iter()
    }

    /// Authors of every entry, in order, duplicates included.
    pub fn authors(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().map(|entry| &entry.author)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a ChangeEntry;
    type IntoIter = std::slice::Iter<'a, ChangeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
