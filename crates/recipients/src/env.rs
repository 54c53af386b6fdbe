// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Config file path from `CULPRITS_CONFIG`, if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("CULPRITS_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// `CULPRITS_DEBUG` forces debug mode on (`1`, `true`, `yes`, `on`).
pub fn debug_forced() -> bool {
    std::env::var("CULPRITS_DEBUG")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
