// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! culprits-core: build, cause, and change-set model shared by the culprits crates

pub mod macros;

pub mod address;
pub mod build;
pub mod cause;
pub mod change;
pub mod history;
pub mod id;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use address::{Address, AddressError};
#[cfg(any(test, feature = "test-support"))]
pub use build::BuildBuilder;
pub use build::{Build, BuildId, BuildIdParseError, BuildStatus};
pub use cause::{Cause, UpstreamCause};
pub use change::{ChangeEntry, ChangeSet, User};
pub use history::BuildHistory;
pub use id::{JobName, UserId};
