// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the listener's external collaborators

pub mod host;
pub mod sink;
pub mod site;
pub mod traced;

pub use host::{ActionCallback, ActionHost, HookRegistry, DEFAULT_PRIORITY};
pub use sink::{NoOpSink, TelemetrySink, Telemeter, TelemeterConfig};
pub use site::{SiteInfo, StaticSite, Theme};
pub use traced::{TracedHost, TracedSink};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sink::{FakeSink, SinkCall};
