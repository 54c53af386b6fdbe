// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub use culprits_core::test_support::{git_changes, linked_build, upstream, upstream_with};
pub use culprits_core::{Build, BuildHistory, BuildId, BuildStatus, Cause};
pub use culprits_recipients::config::DEFAULT_MAX_CAUSE_DEPTH;
pub use culprits_recipients::{
    BufferDebug, Config, DebugLog, EnvVars, ProviderRegistry, PublisherContext, RecipientKind,
    RecipientSets,
};
pub use culprits_storage::{HistorySnapshot, MemoryHistory};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn build(job: &str, number: u32, status: BuildStatus, causes: Vec<Cause>, authors: &[&str]) -> Build {
    let mut build = linked_build(job, number, status);
    build.causes = causes;
    if !authors.is_empty() {
        build.change_sets = Some(vec![git_changes(authors)]);
    }
    build
}

/// Write `builds` as a snapshot file and load it back as a history.
pub struct SnapshotFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl SnapshotFile {
    pub fn write(builds: Vec<Build>) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        HistorySnapshot::new(builds).save(&path).unwrap();
        Self { _dir: dir, path }
    }

    pub fn history(&self) -> MemoryHistory {
        HistorySnapshot::load(&self.path).unwrap().into_history().unwrap()
    }
}

/// Outcome of running one provider for one build.
pub struct Collected {
    pub recipients: RecipientSets,
    pub debug: Vec<String>,
}

impl Collected {
    pub fn addresses(&self, kind: RecipientKind) -> Vec<String> {
        self.recipients.get(kind).iter().map(ToString::to_string).collect()
    }
}

pub fn collect(
    history: &MemoryHistory,
    config: &Config,
    symbol: &str,
    job: &str,
    number: u32,
) -> Collected {
    let registry = ProviderRegistry::from_config(config);
    let provider = registry.get(symbol).unwrap();
    let sink = BufferDebug::new();
    let context = PublisherContext::new(
        history.build(&BuildId::new(job, number)).unwrap(),
        history,
        DebugLog::new(&sink, config.debug.enabled),
    );
    let mut recipients = RecipientSets::new();
    provider.add_recipients(&context, &EnvVars::new(), &mut recipients);
    Collected { recipients, debug: sink.take() }
}

pub const UPSTREAM: &str = "upstreamDevelopersSinceLastSuccess";

pub fn config(text: &str) -> Config {
    Config::from_toml(text).unwrap()
}
