// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `culprits` — compute notification recipients from a build history snapshot.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "culprits", version, about, styles = color::styles())]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute recipients for one build
    Recipients(commands::recipients::RecipientsArgs),
    /// List registered recipient providers
    Providers(commands::providers::ProvidersArgs),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recipients(args) => commands::recipients::handle(args, cli.format),
        Commands::Providers(args) => commands::providers::handle(args, cli.format),
    };

    if let Err(err) = result {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            eprintln!("error: {exit}");
            std::process::exit(exit.code);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `CULPRITS_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CULPRITS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
