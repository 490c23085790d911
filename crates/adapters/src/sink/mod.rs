// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry sinks

mod noop;
mod telemeter;

pub use noop::NoOpSink;
pub use telemeter::{Telemeter, TelemeterConfig};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, SinkCall};

use std::sync::Arc;
use wpt_core::EventLevel;

/// Append-only destination for telemetry log entries
pub trait TelemetrySink: Send + Sync {
    /// Record a `log` event with the given message and level
    fn capture_log(&self, message: &str, level: EventLevel);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for Arc<T> {
    fn capture_log(&self, message: &str, level: EventLevel) {
        (**self).capture_log(message, level);
    }
}
