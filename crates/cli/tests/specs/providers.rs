// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `culprits providers`

use crate::prelude::*;

#[test]
fn lists_builtin_providers() {
    cli().args(&["providers"]).passes().stdout_eq(
        "upstreamDevelopersSinceLastSuccess  Upstream Committers since last success\n\
         developers                          Developers\n",
    );
}

#[test]
fn lists_providers_as_json() {
    let run = cli().args(&["providers", "--format", "json"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!([
            {
                "symbol": "upstreamDevelopersSinceLastSuccess",
                "display_name": "Upstream Committers since last success",
            },
            { "symbol": "developers", "display_name": "Developers" },
        ])
    );
}

#[test]
fn invalid_config_fails() {
    let workspace = Workspace::new();
    let config = workspace.file("culprits.toml", "[resolver]\ndefault_suffix = \"corp\"\n");
    cli()
        .args(&["providers", "--config", &config.display().to_string()])
        .fails_with(1)
        .stderr_has("default_suffix");
}
