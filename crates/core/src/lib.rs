// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpt-core: Core types for host action telemetry
//!
//! This crate provides:
//! - The catalog of instrumentable actions and their arities
//! - The `Value` model for action arguments and the redacting serializer
//! - Telemetry event records
//! - File-backed telemetry settings

pub mod catalog;
pub mod clock;
pub mod serialize;
pub mod settings;
pub mod telemetry;
pub mod value;

pub use catalog::{EventDescriptor, ALL_ACTIONS, DEFAULT_ACTIONS};
pub use clock::{Clock, FakeClock, SystemClock};
pub use serialize::concat_args;
pub use settings::{ConfigError, SettingsOverrides, SettingsStore, TelemetrySettings};
pub use telemetry::{EventBody, EventLevel, EventType, TelemetryEvent};
pub use value::{Closure, Object, Value};
