// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli().args(&["--help"]).passes().stdout_has("recipients").stdout_has("providers");
}

#[test]
fn recipients_help_lists_flags() {
    cli()
        .args(&["recipients", "--help"])
        .passes()
        .stdout_has("--snapshot")
        .stdout_has("--provider")
        .stdout_has("--debug");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn missing_required_flags_is_usage_error() {
    cli().args(&["recipients"]).fails_with(2).stderr_has("--snapshot");
}
