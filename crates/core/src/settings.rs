// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry settings
//!
//! The listener only reads settings. `TelemetrySettings` is the file-backed
//! store; anything else implementing [`SettingsStore`] can stand in for it.

use crate::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default capacity of the telemetry buffer
pub const DEFAULT_MAX_TELEMETRY_EVENTS: usize = 100;

/// Errors loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read-only view of the settings the listener consumes
pub trait SettingsStore: Send + Sync {
    /// Whether the telemetry listener should attach any probes
    fn telemetry_enabled(&self) -> bool;

    /// Action names selected for instrumentation. May contain unknown names.
    fn telemetry_hooks(&self) -> BTreeSet<String>;
}

/// Telemetry section of the plugin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    pub enable_telemetry_listener: bool,
    /// Record captured items (errors, messages) as telemetry for later items
    pub include_items_in_telemetry: bool,
    /// Also record items dropped for being below the reporting level
    pub include_ignored_items_in_telemetry: bool,
    pub telemetry_hooks: BTreeSet<String>,
    pub max_telemetry_events: usize,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            enable_telemetry_listener: true,
            include_items_in_telemetry: true,
            include_ignored_items_in_telemetry: false,
            telemetry_hooks: catalog::default_names()
                .into_iter()
                .map(String::from)
                .collect(),
            max_telemetry_events: DEFAULT_MAX_TELEMETRY_EVENTS,
        }
    }
}

impl TelemetrySettings {
    /// Parse settings from TOML. Keys not related to telemetry are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            enabled = settings.enable_telemetry_listener,
            hooks = settings.telemetry_hooks.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Apply overrides on top of these settings. Set fields win.
    pub fn merge(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(enabled) = overrides.enable_telemetry_listener {
            self.enable_telemetry_listener = enabled;
        }
        if let Some(include) = overrides.include_items_in_telemetry {
            self.include_items_in_telemetry = include;
        }
        if let Some(include) = overrides.include_ignored_items_in_telemetry {
            self.include_ignored_items_in_telemetry = include;
        }
        if let Some(hooks) = overrides.telemetry_hooks {
            self.telemetry_hooks = hooks;
        }
        if let Some(max) = overrides.max_telemetry_events {
            self.max_telemetry_events = max;
        }
        self
    }
}

impl SettingsStore for TelemetrySettings {
    fn telemetry_enabled(&self) -> bool {
        self.enable_telemetry_listener
    }

    fn telemetry_hooks(&self) -> BTreeSet<String> {
        self.telemetry_hooks.clone()
    }
}

/// Site-level overrides applied after the stored settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsOverrides {
    pub enable_telemetry_listener: Option<bool>,
    pub include_items_in_telemetry: Option<bool>,
    pub include_ignored_items_in_telemetry: Option<bool>,
    pub telemetry_hooks: Option<BTreeSet<String>>,
    pub max_telemetry_events: Option<usize>,
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
