// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for recipient collection.
//!
//! Diagnostics are a side channel: human readable progress lines shown in the
//! build's console when debug mode is on. Sinks cannot fail, so nothing
//! written here can change which recipients are collected.

use parking_lot::Mutex;
use std::fmt;

/// Receives formatted diagnostic lines.
pub trait DebugSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDebug;

impl DebugSink for NoopDebug {
    fn emit(&self, _message: &str) {}
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDebug;

impl DebugSink for TracingDebug {
    fn emit(&self, message: &str) {
        tracing::debug!(target: "culprits::debug", "{message}");
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct BufferDebug {
    lines: Mutex<Vec<String>>,
}

impl BufferDebug {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain emitted lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl DebugSink for BufferDebug {
    fn emit(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

/// Debug handle scoped to one recipient collection.
///
/// Formats lazily: when debug mode is off the message is never rendered.
#[derive(Clone, Copy)]
pub struct DebugLog<'a> {
    sink: &'a dyn DebugSink,
    enabled: bool,
}

impl<'a> DebugLog<'a> {
    pub fn new(sink: &'a dyn DebugSink, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    /// A handle that drops everything.
    pub fn disabled() -> DebugLog<'static> {
        DebugLog { sink: &NoopDebug, enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn send(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            self.sink.emit(&args.to_string());
        }
    }
}

impl fmt::Debug for DebugLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugLog").field("enabled", &self.enabled).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
