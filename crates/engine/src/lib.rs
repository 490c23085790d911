// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Telemetry listener engine

mod error;
pub mod extensions;
pub mod handlers;
mod listener;

pub use error::ListenerError;
pub use extensions::Extensions;
pub use handlers::{default_custom_handlers, generic_handler, ArgsHandler, HandlerMap};
pub use listener::{InitReport, Listener, Probe, ACTION_PREFIX};
