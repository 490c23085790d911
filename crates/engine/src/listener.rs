// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry listener
//!
//! Attaches one probe per selected host action. When the host fires an
//! instrumented action the probe formats its arguments and appends an
//! `Action triggered: ...` entry to the telemetry sink.
//!
//! Probes run inline in the host's request lifecycle, so firing never fails
//! outward: handler and sink panics are caught and the entry is dropped.

use crate::error::ListenerError;
use crate::extensions::Extensions;
use crate::handlers::{generic_handler, ArgsHandler, HandlerMap};
use serde::Serialize;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use wpt_adapters::{ActionHost, TelemetrySink, DEFAULT_PRIORITY};
use wpt_core::catalog::{self, DEFAULT_ACTIONS};
use wpt_core::{EventLevel, SettingsStore, Value};

/// Prefix of every message produced by a fired probe
pub const ACTION_PREFIX: &str = "Action triggered: ";

/// A host action bound to a handler
#[derive(Clone)]
pub struct Probe {
    pub action: String,
    pub priority: i32,
    /// Maximum number of arguments passed to the handler
    pub arity: usize,
    /// `None` logs the action name only
    pub handler: Option<ArgsHandler>,
}

impl Probe {
    /// Build the message for a firing of this probe
    fn message(&self, args: &[Value]) -> String {
        let args = if args.len() > self.arity {
            let dropped: Vec<&str> = args[self.arity..].iter().map(Value::kind).collect();
            tracing::debug!(
                action = %self.action,
                arity = self.arity,
                ?dropped,
                "dropping arguments beyond declared arity"
            );
            &args[..self.arity]
        } else {
            args
        };

        let body = match &self.handler {
            Some(handler) => handler(self.action.as_str(), args),
            None => self.action.clone(),
        };
        format!("{}{}", ACTION_PREFIX, body)
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("action", &self.action)
            .field("priority", &self.priority)
            .field("arity", &self.arity)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Shared between the listener and the callbacks it attaches
struct Relay {
    sink: Option<Arc<dyn TelemetrySink>>,
}

impl Relay {
    fn log(&self, message: &str, level: EventLevel) {
        if let Some(sink) = &self.sink {
            sink.capture_log(message, level);
        }
    }

    fn fire(&self, probe: &Probe, args: &[Value]) {
        // Unwinding is contained here, but the process panic hook still runs
        // first and the default hook prints the payload to stderr. Hosts that
        // must keep handler output private install their own hook.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let message = probe.message(args);
            self.log(&message, EventLevel::Info);
        }));
        if result.is_err() {
            tracing::warn!(action = %probe.action, "telemetry dropped: probe failed");
        }
    }
}

/// Outcome of [`Listener::initialize`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub enabled: bool,
    /// Actions that received a probe, in attachment order
    pub attached: Vec<String>,
    /// Actions that already had a probe
    pub skipped: Vec<String>,
    /// Actions whose probe failed validation
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerState {
    Uninitialized,
    Initialized,
}

/// Instruments host actions with telemetry probes
pub struct Listener {
    settings: Arc<dyn SettingsStore>,
    host: Arc<dyn ActionHost>,
    relay: Arc<Relay>,
    extensions: Extensions,
    probes: Vec<Probe>,
    state: ListenerState,
}

impl Listener {
    /// Create a listener. Without a sink every entry is discarded.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        host: Arc<dyn ActionHost>,
        sink: Option<Arc<dyn TelemetrySink>>,
    ) -> Self {
        Self {
            settings,
            host,
            relay: Arc::new(Relay { sink }),
            extensions: Extensions::default(),
            probes: Vec::new(),
            state: ListenerState::Uninitialized,
        }
    }

    /// Filters to apply during initialization
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Attach probes for the configured actions
    ///
    /// Configured names are resolved against the catalog; when none resolve
    /// the default actions are used. `custom_handlers` take precedence over
    /// the generic serializer. May only be called once.
    pub fn initialize(&mut self, custom_handlers: HandlerMap) -> Result<InitReport, ListenerError> {
        if self.state == ListenerState::Initialized {
            return Err(ListenerError::AlreadyInitialized);
        }
        self.state = ListenerState::Initialized;

        if !self.settings.telemetry_enabled() {
            tracing::info!("telemetry listener disabled");
            return Ok(InitReport::default());
        }

        let configured = self.settings.telemetry_hooks();
        let mut selected = catalog::resolve(configured.iter().map(String::as_str));
        if selected.is_empty() {
            tracing::debug!(
                configured = configured.len(),
                "no configured action resolved, using defaults"
            );
            selected = DEFAULT_ACTIONS.to_vec();
        }

        let actions = self.extensions.filter_actions(selected);
        let handlers = self.extensions.filter_handlers(custom_handlers);

        let mut report = InitReport {
            enabled: true,
            ..Default::default()
        };
        for descriptor in actions {
            // Arity always comes from the catalog
            let Some(arity) = catalog::lookup_arity(descriptor.name) else {
                continue;
            };
            let arity = arity.min(descriptor.arity);
            let handler = handlers
                .get(descriptor.name)
                .cloned()
                .unwrap_or_else(generic_handler);

            match self.instrument_action(descriptor.name, DEFAULT_PRIORITY, arity, Some(handler)) {
                Ok(true) => report.attached.push(descriptor.name.to_string()),
                Ok(false) => report.skipped.push(descriptor.name.to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, "probe rejected");
                    report.rejected.push(descriptor.name.to_string());
                }
            }
        }

        tracing::info!(
            attached = report.attached.len(),
            skipped = report.skipped.len(),
            rejected = report.rejected.len(),
            "telemetry listener initialized"
        );
        Ok(report)
    }

    /// Attach a probe to `action`
    ///
    /// Returns `Ok(false)` if the action already has a probe. An arity above
    /// one requires a handler.
    pub fn instrument_action(
        &mut self,
        action: &str,
        priority: i32,
        arity: usize,
        handler: Option<ArgsHandler>,
    ) -> Result<bool, ListenerError> {
        if handler.is_none() && arity > 1 {
            return Err(ListenerError::InvalidConfiguration {
                action: action.to_string(),
                arity,
            });
        }
        if self.probe(action).is_some() {
            tracing::debug!(action, "action already instrumented");
            return Ok(false);
        }

        let probe = Probe {
            action: action.to_string(),
            priority,
            arity,
            handler,
        };
        let relay = Arc::clone(&self.relay);
        let fired = probe.clone();
        self.host.add_action(
            action,
            priority,
            arity,
            Arc::new(move |args: &[Value]| relay.fire(&fired, args)),
        );
        self.probes.push(probe);
        Ok(true)
    }

    /// Handle a firing of `action` as its probe would
    ///
    /// Returns false if the action is not instrumented.
    pub fn on_fire(&self, action: &str, args: &[Value]) -> bool {
        match self.probe(action) {
            Some(probe) => {
                self.relay.fire(probe, args);
                true
            }
            None => false,
        }
    }

    /// Append a message to the telemetry sink, if there is one
    pub fn log(&self, message: &str, level: EventLevel) {
        self.relay.log(message, level);
    }

    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    pub fn probe(&self, action: &str) -> Option<&Probe> {
        self.probes.iter().find(|p| p.action == action)
    }

    pub fn is_initialized(&self) -> bool {
        self.state == ListenerState::Initialized
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
