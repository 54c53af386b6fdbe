// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recipient providers and their registry.

use crate::config::Config;
use crate::context::{EnvVars, PublisherContext};
use crate::developers::Developers;
use crate::recipients::RecipientSets;
use crate::resolve::DirectoryResolver;
use crate::upstream::UpstreamCommittersSinceLastSuccess;
use indexmap::IndexMap;

/// Contributes recipients for the build in `context`.
///
/// Providers never fail: missing history or data means they add nothing.
pub trait RecipientProvider {
    /// Name used to select the provider from pipelines and the CLI
    fn symbol(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn add_recipients(
        &self,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    );
}

/// Providers keyed by symbol, in registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: IndexMap<&'static str, Box<dyn RecipientProvider + Send + Sync>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider, resolving through the config's
    /// user directory and resolver settings.
    pub fn from_config(config: &Config) -> Self {
        let resolver = DirectoryResolver::from_config(config.user_directory(), &config.resolver);
        let mut registry = Self::new();
        registry.register(
            UpstreamCommittersSinceLastSuccess::new(resolver.clone())
                .with_max_cause_depth(config.expansion.max_cause_depth),
        );
        registry.register(Developers::new(resolver));
        registry
    }

    /// Register a provider, replacing any provider with the same symbol.
    pub fn register<P>(&mut self, provider: P)
    where
        P: RecipientProvider + Send + Sync + 'static,
    {
        let symbol = provider.symbol();
        if self.providers.insert(symbol, Box::new(provider)).is_some() {
            tracing::warn!(symbol, "replaced registered recipient provider");
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&(dyn RecipientProvider + Send + Sync)> {
        self.providers.get(symbol).map(|p| p.as_ref())
    }

    /// (symbol, display name) pairs in registration order.
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        self.providers.values().map(|p| (p.symbol(), p.display_name())).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.providers.keys()).finish()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
