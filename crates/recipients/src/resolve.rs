// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of users into recipient addresses.

use crate::config::ResolverConfig;
use crate::context::{EnvVars, PublisherContext};
use crate::recipients::{RecipientKind, RecipientSets};
use culprits_core::{Address, User, UserId};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Policy turning one user into zero or more recipients.
///
/// Implementations append to `recipients`; the sets take care of
/// deduplication, so a resolver may be called for the same user many times.
pub trait Resolver {
    fn resolve(
        &self,
        user: &User,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    );
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(
        &self,
        user: &User,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        (**self).resolve(user, context, env, recipients);
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve(
        &self,
        user: &User,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        (**self).resolve(user, context, env, recipients);
    }
}

/// Adapts a closure into a [`Resolver`].
pub struct FnResolver<F>(pub F);

impl<F> Resolver for FnResolver<F>
where
    F: Fn(&User, &PublisherContext<'_>, &EnvVars, &mut RecipientSets),
{
    fn resolve(
        &self,
        user: &User,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        (self.0)(user, context, env, recipients);
    }
}

/// Known address text per user id.
///
/// Address text may list several addresses separated by commas, each
/// optionally prefixed with `cc:` or `bcc:`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    addresses: BTreeMap<UserId, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: impl Into<UserId>, address: impl Into<String>) {
        self.addresses.insert(user.into(), address.into());
    }

    pub fn get(&self, user: &UserId) -> Option<&str> {
        self.addresses.get(user).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<K: Into<UserId>, V: Into<String>> FromIterator<(K, V)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { addresses: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Default resolution policy.
///
/// 1. users in the exclusion list are suppressed;
/// 2. the directory entry is used, else `{id}{default_suffix}` when a
///    suffix is configured, else the user is skipped;
/// 3. address text is env-expanded, split on commas, and routed by prefix;
/// 4. invalid addresses and addresses outside `allowed_domains` are dropped.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    directory: UserDirectory,
    default_suffix: Option<String>,
    allowed_domains: Vec<String>,
    excluded: HashSet<UserId>,
}

impl DirectoryResolver {
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory, ..Self::default() }
    }

    pub fn from_config(directory: UserDirectory, config: &ResolverConfig) -> Self {
        Self {
            directory,
            default_suffix: config.default_suffix.clone(),
            allowed_domains: config.allowed_domains.iter().map(|d| d.to_ascii_lowercase()).collect(),
            excluded: config.excluded_users.iter().map(|u| UserId::new(u.as_str())).collect(),
        }
    }

    pub fn with_default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_suffix = Some(suffix.into());
        self
    }

    pub fn with_allowed_domain(mut self, domain: impl Into<String>) -> Self {
        self.allowed_domains.push(domain.into().to_ascii_lowercase());
        self
    }

    pub fn with_excluded_user(mut self, user: impl Into<UserId>) -> Self {
        self.excluded.insert(user.into());
        self
    }

    fn address_text(&self, user: &User) -> Option<String> {
        if let Some(text) = self.directory.get(&user.id) {
            return Some(text.to_string());
        }
        self.default_suffix.as_ref().map(|suffix| format!("{}{}", user.id, suffix))
    }

    fn domain_allowed(&self, address: &Address) -> bool {
        self.allowed_domains.is_empty() || self.allowed_domains.iter().any(|d| d == address.domain())
    }
}

impl Resolver for DirectoryResolver {
    fn resolve(
        &self,
        user: &User,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        let debug = context.debug();
        if self.excluded.contains(&user.id) {
            debug.send(format_args!("User {} is excluded from notifications", user.id));
            return;
        }
        let Some(text) = self.address_text(user) else {
            debug.send(format_args!("Failed to get e-mail address for {}", user.id));
            return;
        };

        let text = env.expand(&text);
        for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (kind, raw) = RecipientKind::split_prefix(part);
            let address = match Address::parse(raw) {
                Ok(address) => address,
                Err(e) => {
                    debug.send(format_args!("Ignoring invalid address for {}: {}", user.id, e));
                    continue;
                }
            };
            if !self.domain_allowed(&address) {
                debug.send(format_args!("Address {} is not in an allowed domain", address));
                continue;
            }
            if recipients.add(kind, address.clone()) {
                tracing::debug!(user = %user.id, %address, %kind, "added recipient");
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod recording {
    use super::Resolver;
    use crate::context::{EnvVars, PublisherContext};
    use crate::recipients::{RecipientKind, RecipientSets};
    use culprits_core::{Address, User, UserId};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Resolver that records every call and maps `id` to `id@example.com`.
    #[derive(Clone, Default)]
    pub struct RecordingResolver {
        calls: Arc<Mutex<Vec<UserId>>>,
    }

    impl RecordingResolver {
        pub fn new() -> Self {
            Self::default()
        }

        /// User ids in call order
        pub fn calls(&self) -> Vec<UserId> {
            self.calls.lock().clone()
        }
    }

    impl Resolver for RecordingResolver {
        fn resolve(
            &self,
            user: &User,
            _context: &PublisherContext<'_>,
            _env: &EnvVars,
            recipients: &mut RecipientSets,
        ) {
            self.calls.lock().push(user.id.clone());
            if let Ok(address) = Address::parse(&format!("{}@example.com", user.id)) {
                recipients.add(RecipientKind::To, address);
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingResolver;

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
