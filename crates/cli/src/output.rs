// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use culprits_recipients::{RecipientKind, RecipientSets};
use serde::Serialize;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `data` as pretty JSON, or run `text_fn` for text output.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// JSON shape of a `culprits recipients` run.
#[derive(Debug, Serialize)]
pub struct RecipientReport {
    pub build: String,
    pub provider: &'static str,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
}

impl RecipientReport {
    pub fn new(build: String, provider: &'static str, recipients: &RecipientSets) -> Self {
        let addresses =
            |kind: RecipientKind| recipients.get(kind).iter().map(ToString::to_string).collect::<Vec<_>>();
        Self {
            build,
            provider,
            to: addresses(RecipientKind::To),
            cc: addresses(RecipientKind::Cc),
            bcc: addresses(RecipientKind::Bcc),
        }
    }
}

/// One `kind: address` line per recipient, grouped to, cc, bcc.
pub fn recipient_lines(recipients: &RecipientSets) -> Vec<String> {
    recipients
        .iter()
        .map(|(kind, address)| format!("{}: {}", color::header(&kind.to_string()), address))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ProviderEntry {
    pub symbol: &'static str,
    pub display_name: &'static str,
}

/// Symbols padded to a common width, followed by display names.
pub fn provider_lines(providers: &[ProviderEntry]) -> Vec<String> {
    let width = providers.iter().map(|p| p.symbol.len()).max().unwrap_or(0);
    providers
        .iter()
        .map(|p| format!("{:<width$}  {}", p.symbol, color::context(p.display_name)))
        .collect()
}
