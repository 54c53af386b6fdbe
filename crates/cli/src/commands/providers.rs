// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `culprits providers` — list registered recipient providers.

use anyhow::Result;
use clap::Args;
use culprits_recipients::{Config, ProviderRegistry};
use std::path::PathBuf;

use crate::output::{format_or_json, provider_lines, OutputFormat, ProviderEntry};

#[derive(Args)]
pub struct ProvidersArgs {
    /// Config file (default: $CULPRITS_CONFIG, then built-in defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn handle(args: ProvidersArgs, format: OutputFormat) -> Result<()> {
    let config = Config::discover(args.config.as_deref())?;
    let registry = ProviderRegistry::from_config(&config);
    let providers: Vec<_> = registry
        .list()
        .into_iter()
        .map(|(symbol, display_name)| ProviderEntry { symbol, display_name })
        .collect();

    format_or_json(format, &providers, || {
        for line in provider_lines(&providers) {
            println!("{line}");
        }
    })
}
