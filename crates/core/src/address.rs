// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mail addresses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a mail address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address '{0}' is missing '@'")]
    MissingAt(String),
    #[error("address '{0}' contains more than one '@'")]
    MultipleAt(String),
    #[error("address '{0}' has an empty local part")]
    EmptyLocal(String),
    #[error("address '{0}' has an empty domain")]
    EmptyDomain(String),
    #[error("address '{0}' contains whitespace")]
    Whitespace(String),
    #[error("address '{0}' has an unterminated '<'")]
    Unterminated(String),
}

/// A validated `local@domain` mail address.
///
/// Accepts either a bare address or the `Name <local@domain>` form, in which
/// case the display name is dropped. The domain is stored lowercased so that
/// equality and ordering follow address identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    text: String,
    at: usize,
}

impl Address {
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        let bare = match trimmed.find('<') {
            Some(open) => {
                let rest = &trimmed[open + 1..];
                let close =
                    rest.find('>').ok_or_else(|| AddressError::Unterminated(input.to_string()))?;
                rest[..close].trim()
            }
            None => trimmed,
        };
        if bare.chars().any(char::is_whitespace) {
            return Err(AddressError::Whitespace(input.to_string()));
        }
        let (local, domain) =
            bare.split_once('@').ok_or_else(|| AddressError::MissingAt(input.to_string()))?;
        if domain.contains('@') {
            return Err(AddressError::MultipleAt(input.to_string()));
        }
        if local.is_empty() {
            return Err(AddressError::EmptyLocal(input.to_string()));
        }
        if domain.is_empty() {
            return Err(AddressError::EmptyDomain(input.to_string()));
        }
        Ok(Self { text: format!("{}@{}", local, domain.to_ascii_lowercase()), at: local.len() })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn local(&self) -> &str {
        &self.text[..self.at]
    }

    /// Lowercased domain.
    pub fn domain(&self) -> &str {
        &self.text[self.at + 1..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.text
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
