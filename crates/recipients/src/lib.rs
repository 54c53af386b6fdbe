// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! culprits-recipients: who to notify about a build, from its upstream causes
//! and change sets

pub mod committers;
pub mod config;
pub mod context;
pub mod debug;
pub mod developers;
pub mod env;
pub mod expand;
pub mod provider;
pub mod recipients;
pub mod resolve;
pub mod upstream;
pub mod window;

pub use committers::{add_committers, add_upstream_committers};
pub use config::{Config, ConfigError, DebugConfig, ExpansionConfig, ResolverConfig};
pub use context::{EnvVars, PublisherContext};
pub use debug::{BufferDebug, DebugLog, DebugSink, NoopDebug, TracingDebug};
pub use developers::Developers;
pub use expand::{collect_upstream_builds, UpstreamExpander};
pub use provider::{ProviderRegistry, RecipientProvider};
pub use recipients::{RecipientKind, RecipientSets};
#[cfg(any(test, feature = "test-support"))]
pub use resolve::RecordingResolver;
pub use resolve::{DirectoryResolver, FnResolver, Resolver, UserDirectory};
pub use upstream::UpstreamCommittersSinceLastSuccess;
pub use window::HistoryWindow;
