// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op sink for when telemetry collection is disabled.

use super::TelemetrySink;
use wpt_core::EventLevel;

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for NoOpSink {
    fn capture_log(&self, _message: &str, _level: EventLevel) {}
}
