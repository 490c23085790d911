// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process action registry

use super::{ActionCallback, ActionHost};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wpt_core::Value;

struct RegisteredAction {
    priority: i32,
    seq: u64,
    accepted_args: usize,
    callback: ActionCallback,
}

#[derive(Default)]
struct RegistryState {
    actions: HashMap<String, Vec<RegisteredAction>>,
    fired: HashMap<String, u64>,
    next_seq: u64,
}

/// Action registry for a single request
///
/// Callbacks run in ascending priority, then registration order. Each
/// callback receives the fired arguments truncated to its `accepted_args`.
#[derive(Clone, Default)]
pub struct HookRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire an action. Returns the number of callbacks invoked.
    pub fn do_action(&self, hook: &str, args: &[Value]) -> usize {
        // Snapshot callbacks so they may register or fire actions themselves
        let callbacks: Vec<(usize, ActionCallback)> = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            *state.fired.entry(hook.to_string()).or_insert(0) += 1;
            match state.actions.get(hook) {
                Some(registered) => registered
                    .iter()
                    .map(|a| (a.accepted_args, Arc::clone(&a.callback)))
                    .collect(),
                None => return 0,
            }
        };

        for (accepted_args, callback) in &callbacks {
            let n = (*accepted_args).min(args.len());
            callback(&args[..n]);
        }
        callbacks.len()
    }

    pub fn has_action(&self, hook: &str) -> bool {
        self.action_count(hook) > 0
    }

    /// Number of callbacks attached to `hook`
    pub fn action_count(&self, hook: &str) -> usize {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.actions.get(hook).map_or(0, Vec::len)
    }

    /// Number of times `hook` has been fired
    pub fn did_action(&self, hook: &str) -> u64 {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.fired.get(hook).copied().unwrap_or(0)
    }

    pub fn remove_all_actions(&self, hook: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.actions.remove(hook);
    }
}

impl ActionHost for HookRegistry {
    fn add_action(
        &self,
        hook: &str,
        priority: i32,
        accepted_args: usize,
        callback: ActionCallback,
    ) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let seq = state.next_seq;
        state.next_seq += 1;

        let registered = state.actions.entry(hook.to_string()).or_default();
        let pos = registered.partition_point(|a| (a.priority, a.seq) <= (priority, seq));
        registered.insert(
            pos,
            RegisteredAction {
                priority,
                seq,
                accepted_args,
                callback,
            },
        );
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
