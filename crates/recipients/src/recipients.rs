// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! To/cc/bcc recipient sets.

use culprits_core::Address;
use serde::Serialize;
use std::collections::BTreeSet;

/// Which header a recipient lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientKind {
    To,
    Cc,
    Bcc,
}

impl RecipientKind {
    /// Split a `cc:` or `bcc:` routing prefix off an address string.
    ///
    /// Unprefixed text routes to `To`. Prefixes are case-insensitive.
    pub fn split_prefix(text: &str) -> (Self, &str) {
        let trimmed = text.trim_start();
        for (prefix, kind) in [("bcc:", RecipientKind::Bcc), ("cc:", RecipientKind::Cc)] {
            if let Some(head) = trimmed.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) {
                    return (kind, &trimmed[prefix.len()..]);
                }
            }
        }
        (RecipientKind::To, trimmed)
    }
}

culprits_core::simple_display! {
    RecipientKind {
        To => "to",
        Cc => "cc",
        Bcc => "bcc",
    }
}

/// Deduplicated recipient sets, accumulated in place by resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientSets {
    pub to: BTreeSet<Address>,
    pub cc: BTreeSet<Address>,
    pub bcc: BTreeSet<Address>,
}

impl RecipientSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an address; returns false when it was already present in that set.
    pub fn add(&mut self, kind: RecipientKind, address: Address) -> bool {
        self.set_mut(kind).insert(address)
    }

    pub fn get(&self, kind: RecipientKind) -> &BTreeSet<Address> {
        match kind {
            RecipientKind::To => &self.to,
            RecipientKind::Cc => &self.cc,
            RecipientKind::Bcc => &self.bcc,
        }
    }

    fn set_mut(&mut self, kind: RecipientKind) -> &mut BTreeSet<Address> {
        match kind {
            RecipientKind::To => &mut self.to,
            RecipientKind::Cc => &mut self.cc,
            RecipientKind::Bcc => &mut self.bcc,
        }
    }

    pub fn contains(&self, kind: RecipientKind, address: &Address) -> bool {
        self.get(kind).contains(address)
    }

    /// Total number of addresses across all three sets.
    pub fn len(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(&mut self, other: RecipientSets) {
        self.to.extend(other.to);
        self.cc.extend(other.cc);
        self.bcc.extend(other.bcc);
    }

    /// Every address with its kind, `to` first.
    pub fn iter(&self) -> impl Iterator<Item = (RecipientKind, &Address)> {
        self.to
            .iter()
            .map(|a| (RecipientKind::To, a))
            .chain(self.cc.iter().map(|a| (RecipientKind::Cc, a)))
            .chain(self.bcc.iter().map(|a| (RecipientKind::Bcc, a)))
    }
}

#[cfg(test)]
#[path = "recipients_tests.rs"]
mod tests;
