// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! culprits-storage: in-memory build history and JSON history snapshots

mod memory;
mod snapshot;

pub use memory::MemoryHistory;
pub use snapshot::{HistorySnapshot, SnapshotError};
