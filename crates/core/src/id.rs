// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name newtypes for jobs and users.

/// Define a newtype name wrapper around `SmolStr`.
///
/// Generates `new()`, `as_str()`, `is_empty()`, `Display`, `From<String>`,
/// `From<&str>`, `PartialEq<str>`, `PartialEq<&str>`, `Borrow<str>`, and
/// `Deref` implementations. Names are compared and ordered by their text.
///
/// ```ignore
/// define_name! {
///     /// Doc comment for the name type.
///     pub struct JobName;
/// }
/// ```
#[macro_export]
macro_rules! define_name {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(smol_str::SmolStr);

        impl $name {
            pub fn new(name: impl Into<smol_str::SmolStr>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the name is an empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }
    };
}

crate::define_name! {
    /// Name of a job. Builds of the same job share it.
    pub struct JobName;
}

crate::define_name! {
    /// Identity of a user known to the build host (the author of a commit).
    pub struct UserId;
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
