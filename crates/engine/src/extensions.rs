// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extension filters applied during initialization
//!
//! Site code may adjust the selected actions and the custom handler map before
//! probes are attached. Action overrides are checked against the catalog
//! again: unknown names are dropped and arities can only be lowered.

use crate::handlers::HandlerMap;
use std::collections::BTreeMap;
use wpt_core::catalog::{self, EventDescriptor};

/// Rewrites the selected actions, keyed by name with their accepted args
pub type ActionsFilter =
    Box<dyn Fn(BTreeMap<String, usize>) -> BTreeMap<String, usize> + Send + Sync>;

/// Rewrites the custom handler map
pub type HandlersFilter = Box<dyn Fn(HandlerMap) -> HandlerMap + Send + Sync>;

/// Registered filters, applied in registration order
#[derive(Default)]
pub struct Extensions {
    actions: Vec<ActionsFilter>,
    handlers: Vec<HandlersFilter>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_actions(
        mut self,
        filter: impl Fn(BTreeMap<String, usize>) -> BTreeMap<String, usize> + Send + Sync + 'static,
    ) -> Self {
        self.actions.push(Box::new(filter));
        self
    }

    pub fn on_handlers(
        mut self,
        filter: impl Fn(HandlerMap) -> HandlerMap + Send + Sync + 'static,
    ) -> Self {
        self.handlers.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.handlers.is_empty()
    }

    /// Run the action filters and re-validate the result against the catalog
    pub fn filter_actions(&self, selected: Vec<EventDescriptor>) -> Vec<EventDescriptor> {
        if self.actions.is_empty() {
            return selected;
        }

        let initial: BTreeMap<String, usize> = selected
            .iter()
            .map(|d| (d.name.to_string(), d.arity))
            .collect();
        let filtered = self
            .actions
            .iter()
            .fold(initial, |actions, filter| filter(actions));

        let mut resolved = catalog::resolve(filtered.keys().map(String::as_str));
        for descriptor in &mut resolved {
            let requested = filtered.get(descriptor.name).copied().unwrap_or(0);
            if requested > descriptor.arity {
                tracing::debug!(
                    action = descriptor.name,
                    requested,
                    allowed = descriptor.arity,
                    "clamping filtered arity to catalog"
                );
            }
            descriptor.arity = requested.min(descriptor.arity);
        }
        resolved
    }

    /// Run the handler filters
    pub fn filter_handlers(&self, handlers: HandlerMap) -> HandlerMap {
        self.handlers
            .iter()
            .fold(handlers, |handlers, filter| filter(handlers))
    }
}

#[cfg(test)]
#[path = "extensions_tests.rs"]
mod tests;
