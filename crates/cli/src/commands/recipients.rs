// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `culprits recipients` — run one provider against a history snapshot.

use anyhow::Result;
use clap::Args;
use culprits_core::{BuildHistory, BuildId};
use culprits_recipients::{
    BufferDebug, Config, DebugLog, EnvVars, ProviderRegistry, PublisherContext, RecipientSets,
    UpstreamCommittersSinceLastSuccess,
};
use culprits_storage::HistorySnapshot;
use std::path::PathBuf;

use crate::exit_error::ExitError;
use crate::output::{format_or_json, recipient_lines, OutputFormat, RecipientReport};

#[derive(Args)]
pub struct RecipientsArgs {
    /// History snapshot (JSON)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Job name of the build being published
    #[arg(long)]
    pub job: String,

    /// Build number of the build being published
    #[arg(long)]
    pub build: u32,

    /// Config file (default: $CULPRITS_CONFIG, then built-in defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Recipient provider symbol
    #[arg(long, default_value = UpstreamCommittersSinceLastSuccess::<()>::SYMBOL)]
    pub provider: String,

    /// Print diagnostic lines to stderr
    #[arg(long)]
    pub debug: bool,

    /// Variables available to address expansion, as KEY=VALUE
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_var)]
    pub env: Vec<(String, String)>,
}

pub fn handle(args: RecipientsArgs, format: OutputFormat) -> Result<()> {
    let mut config = Config::discover(args.config.as_deref())?;
    if args.debug {
        config.debug.enabled = true;
    }

    let history = HistorySnapshot::load(&args.snapshot)?.into_history()?;

    let registry = ProviderRegistry::from_config(&config);
    let provider = registry
        .get(&args.provider)
        .ok_or_else(|| ExitError::not_found(format!("unknown provider '{}'", args.provider)))?;

    let id = BuildId::new(args.job.as_str(), args.build);
    let build = history
        .build(&id)
        .ok_or_else(|| ExitError::not_found(format!("build {id} not found in snapshot")))?;

    let sink = BufferDebug::new();
    let context = PublisherContext::new(build, &history, DebugLog::new(&sink, config.debug.enabled));
    let env: EnvVars = args.env.into_iter().collect();
    let mut recipients = RecipientSets::new();
    provider.add_recipients(&context, &env, &mut recipients);

    tracing::info!(
        build = %id,
        provider = provider.symbol(),
        recipients = recipients.len(),
        "computed recipients"
    );
    for line in sink.take() {
        eprintln!("{line}");
    }

    let report = RecipientReport::new(id.to_string(), provider.symbol(), &recipients);
    format_or_json(format, &report, || {
        for line in recipient_lines(&recipients) {
            println!("{line}");
        }
    })
}

/// Parse `KEY=VALUE`; the value may itself contain `=`.
fn parse_env_var(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{text}'")),
    }
}

#[cfg(test)]
#[path = "recipients_tests.rs"]
mod tests;
