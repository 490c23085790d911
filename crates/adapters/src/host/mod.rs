// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host action dispatch

mod registry;

pub use registry::HookRegistry;

use std::sync::Arc;
use wpt_core::Value;

/// Callback attached to a host action
pub type ActionCallback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Default priority used by the host when none is given
pub const DEFAULT_PRIORITY: i32 = 10;

/// The host's named-action mechanism
///
/// When the host fires `hook` it passes at most `accepted_args` positional
/// arguments to `callback`.
pub trait ActionHost: Send + Sync {
    fn add_action(&self, hook: &str, priority: i32, accepted_args: usize, callback: ActionCallback);
}
