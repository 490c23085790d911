// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry event records
//!
//! The unit appended to a telemetry buffer. Mirrors the breadcrumb shape
//! accepted by the error-tracking service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a telemetry event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl EventLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLevel::Debug => "debug",
            EventLevel::Info => "info",
            EventLevel::Warning => "warning",
            EventLevel::Error => "error",
            EventLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a telemetry event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Log,
    Network,
    Navigation,
    Error,
    Manual,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Log => "log",
            EventType::Network => "network",
            EventType::Navigation => "navigation",
            EventType::Error => "error",
            EventType::Manual => "manual",
        }
    }
}

/// Body of a telemetry event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBody {
    pub message: String,
}

/// A single telemetry breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub level: EventLevel,
    pub body: EventBody,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
}

impl TelemetryEvent {
    /// A `log` event carrying a plain message
    pub fn log(message: impl Into<String>, level: EventLevel, timestamp_ms: u64) -> Self {
        Self {
            event_type: EventType::Log,
            level,
            body: EventBody {
                message: message.into(),
            },
            timestamp_ms,
        }
    }

    pub fn message(&self) -> &str {
        &self.body.message
    }
}

impl fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<8} {}",
            self.event_type.as_str(),
            self.level.as_str(),
            self.body.message
        )
    }
}
