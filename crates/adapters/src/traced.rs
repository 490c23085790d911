// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::host::{ActionCallback, ActionHost};
use crate::sink::TelemetrySink;
use wpt_core::EventLevel;

/// Wrapper that adds tracing to any TelemetrySink
#[derive(Clone)]
pub struct TracedSink<S> {
    inner: S,
}

impl<S> TracedSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: TelemetrySink> TelemetrySink for TracedSink<S> {
    fn capture_log(&self, message: &str, level: EventLevel) {
        tracing::trace!(%level, message_len = message.len(), "telemetry captured");
        self.inner.capture_log(message, level);
    }
}

/// Wrapper that adds tracing to any ActionHost
#[derive(Clone)]
pub struct TracedHost<H> {
    inner: H,
}

impl<H> TracedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: ActionHost> ActionHost for TracedHost<H> {
    fn add_action(
        &self,
        hook: &str,
        priority: i32,
        accepted_args: usize,
        callback: ActionCallback,
    ) {
        let span = tracing::debug_span!("host.add_action", hook);
        let _guard = span.enter();

        tracing::debug!(priority, accepted_args, "attaching");
        self.inner.add_action(hook, priority, accepted_args, callback);
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
