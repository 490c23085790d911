// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the telemetry listener

use thiserror::Error;

/// Errors that can occur while attaching probes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("invalid configuration for {action}: {arity} accepted args require an args handler")]
    InvalidConfiguration { action: String, arity: usize },
    #[error("telemetry listener is already initialized")]
    AlreadyInitialized,
}
