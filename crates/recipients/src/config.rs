// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for recipient collection.
//!
//! ```toml
//! [debug]
//! enabled = true
//!
//! [expansion]
//! max_cause_depth = 64
//!
//! [resolver]
//! default_suffix = "@example.com"
//! allowed_domains = ["example.com"]
//! excluded_users = ["release-bot"]
//!
//! [users]
//! alice = "alice@example.com, cc:lead@example.com"
//! ```

use crate::env;
use crate::resolve::UserDirectory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default bound on nested upstream cause depth.
pub const DEFAULT_MAX_CAUSE_DEPTH: usize = 64;

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("default_suffix '{0}' must start with '@'")]
    InvalidSuffix(String),
    #[error("allowed_domains contains an empty domain")]
    EmptyDomain,
    #[error("max_cause_depth must be at least 1")]
    ZeroDepth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Nested upstream causes deeper than this are not followed.
    ///
    /// Expansion already terminates without it; the bound trades completeness
    /// of very long acyclic chains for bounded recursion depth.
    pub max_cause_depth: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self { max_cause_depth: DEFAULT_MAX_CAUSE_DEPTH }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Appended to a user id when the directory has no address for it
    pub default_suffix: Option<String>,
    /// When non-empty, only addresses in these domains are kept
    pub allowed_domains: Vec<String>,
    pub excluded_users: Vec<String>,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub debug: DebugConfig,
    pub expansion: ExpansionConfig,
    pub resolver: ResolverConfig,
    /// User id → address text
    pub users: BTreeMap<String, String>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `CULPRITS_CONFIG`, then
    /// defaults. `CULPRITS_DEBUG` turns debug mode on afterwards.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(env::config_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if env::debug_forced() {
            config.debug.enabled = true;
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(suffix) = &self.resolver.default_suffix {
            if !suffix.starts_with('@') {
                return Err(ConfigError::InvalidSuffix(suffix.clone()));
            }
        }
        if self.resolver.allowed_domains.iter().any(|d| d.trim().is_empty()) {
            return Err(ConfigError::EmptyDomain);
        }
        if self.expansion.max_cause_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    pub fn user_directory(&self) -> UserDirectory {
        self.users.iter().map(|(user, address)| (user.as_str(), address.as_str())).collect()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
