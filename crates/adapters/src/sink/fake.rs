// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::TelemetrySink;
use std::sync::{Arc, Mutex};
use wpt_core::EventLevel;

/// Recorded capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkCall {
    pub message: String,
    pub level: EventLevel,
}

/// Fake sink that records every capture
#[derive(Clone, Default)]
pub struct FakeSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded captures
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Messages of all recorded captures, in order
    pub fn messages(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.message).collect()
    }
}

impl TelemetrySink for FakeSink {
    fn capture_log(&self, message: &str, level: EventLevel) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SinkCall {
                message: message.to_string(),
                level,
            });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
