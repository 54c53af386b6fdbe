// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-build context handed to providers and resolvers.

use crate::debug::DebugLog;
use culprits_core::{Build, BuildHistory};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// `${NAME}` or `$NAME`
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("constant regex pattern is valid")
});

/// Build environment variables.
///
/// Opaque to recipient collection; resolvers may use them to expand
/// `$VAR` / `${VAR}` references in configured address text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Replace `$NAME` and `${NAME}` with their values.
    ///
    /// Unknown variables are left as written.
    pub fn expand(&self, text: &str) -> String {
        VAR_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                match self.get(name) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The build being post-processed, with access to its history and the
/// debug channel.
pub struct PublisherContext<'a> {
    build: Arc<Build>,
    history: &'a dyn BuildHistory,
    debug: DebugLog<'a>,
}

impl<'a> PublisherContext<'a> {
    pub fn new(build: Arc<Build>, history: &'a dyn BuildHistory, debug: DebugLog<'a>) -> Self {
        Self { build, history, debug }
    }

    /// The build recipients are being collected for.
    pub fn build(&self) -> &Arc<Build> {
        &self.build
    }

    pub fn history(&self) -> &'a dyn BuildHistory {
        self.history
    }

    pub fn debug(&self) -> DebugLog<'a> {
        self.debug
    }
}

impl std::fmt::Debug for PublisherContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherContext")
            .field("build", &self.build.id)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
