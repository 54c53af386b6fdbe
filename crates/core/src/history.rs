// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read access to the build host's history.

use crate::build::{Build, BuildId};
use std::collections::HashSet;
use std::sync::Arc;

/// Build storage as seen by recipient collection.
///
/// Lookups return `None` for builds that never existed or have been rotated
/// away. Callers treat that as "nothing to contribute", never as a fault.
pub trait BuildHistory {
    /// Look up a build by id.
    fn build(&self, id: &BuildId) -> Option<Arc<Build>>;

    /// The immediately preceding build of the same job.
    fn previous_build(&self, build: &Build) -> Option<Arc<Build>> {
        build.previous_id().and_then(|id| self.build(&id))
    }

    /// The closest preceding build of the same job that succeeded.
    ///
    /// Stops at the end of the available history, and on a previous-link
    /// loop in corrupt history.
    fn previous_successful_build(&self, build: &Build) -> Option<Arc<Build>> {
        let mut seen = HashSet::from([build.id.clone()]);
        let mut cursor = self.previous_build(build);
        while let Some(candidate) = cursor {
            if candidate.is_successful() {
                return Some(candidate);
            }
            if !seen.insert(candidate.id.clone()) {
                return None;
            }
            cursor = self.previous_build(&candidate);
        }
        None
    }
}

impl<T: BuildHistory + ?Sized> BuildHistory for &T {
    fn build(&self, id: &BuildId) -> Option<Arc<Build>> {
        (**self).build(id)
    }

    fn previous_build(&self, build: &Build) -> Option<Arc<Build>> {
        (**self).previous_build(build)
    }

    fn previous_successful_build(&self, build: &Build) -> Option<Arc<Build>> {
        (**self).previous_successful_build(build)
    }
}

impl<T: BuildHistory + ?Sized> BuildHistory for Arc<T> {
    fn build(&self, id: &BuildId) -> Option<Arc<Build>> {
        (**self).build(id)
    }

    fn previous_build(&self, build: &Build) -> Option<Arc<Build>> {
        (**self).previous_build(build)
    }

    fn previous_successful_build(&self, build: &Build) -> Option<Arc<Build>> {
        (**self).previous_successful_build(build)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
