// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory telemetry buffer

use super::TelemetrySink;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wpt_core::settings::DEFAULT_MAX_TELEMETRY_EVENTS;
use wpt_core::{Clock, EventLevel, EventType, SystemClock, TelemetryEvent, TelemetrySettings};

/// Buffer behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemeterConfig {
    /// Oldest events are evicted beyond this many
    pub max_events: usize,
    pub include_items: bool,
    pub include_ignored_items: bool,
}

impl Default for TelemeterConfig {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_TELEMETRY_EVENTS,
            include_items: true,
            include_ignored_items: false,
        }
    }
}

impl From<&TelemetrySettings> for TelemeterConfig {
    fn from(settings: &TelemetrySettings) -> Self {
        Self {
            max_events: settings.max_telemetry_events,
            include_items: settings.include_items_in_telemetry,
            include_ignored_items: settings.include_ignored_items_in_telemetry,
        }
    }
}

/// Bounded, append-only buffer of telemetry events
pub struct Telemeter {
    config: TelemeterConfig,
    clock: Arc<dyn Clock>,
    events: Mutex<VecDeque<TelemetryEvent>>,
}

impl Telemeter {
    pub fn new(config: TelemeterConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: TelemeterConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            events: Mutex::new(VecDeque::with_capacity(config.max_events.min(1024))),
        }
    }

    /// Append an event, evicting the oldest when full
    pub fn capture(&self, event: TelemetryEvent) {
        if self.config.max_events == 0 {
            return;
        }
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        while events.len() >= self.config.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Record a captured item (error or message) as telemetry
    ///
    /// `ignored` marks items that were not reported because of their level.
    /// Returns whether the item was recorded.
    pub fn capture_item(&self, message: &str, level: EventLevel, ignored: bool) -> bool {
        if !self.config.include_items || (ignored && !self.config.include_ignored_items) {
            return false;
        }
        let event_type = if level >= EventLevel::Error {
            EventType::Error
        } else {
            EventType::Log
        };
        let mut event = TelemetryEvent::log(message, level, self.clock.now_ms());
        event.event_type = event_type;
        self.capture(event);
        true
    }

    /// Copy of all buffered events, oldest first
    pub fn copy_events(&self) -> Vec<TelemetryEvent> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Default for Telemeter {
    fn default() -> Self {
        Self::new(TelemeterConfig::default())
    }
}

impl TelemetrySink for Telemeter {
    fn capture_log(&self, message: &str, level: EventLevel) {
        self.capture(TelemetryEvent::log(message, level, self.clock.now_ms()));
    }
}

#[cfg(test)]
#[path = "telemeter_tests.rs"]
mod tests;
