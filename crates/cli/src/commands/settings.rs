// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wpt settings` - Show effective telemetry settings

use crate::output::{self, OutputFormat};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use wpt_core::{SettingsOverrides, TelemetrySettings};

/// Where settings come from, shared by every command that needs them
#[derive(Args, Debug, Default)]
pub struct SettingsSource {
    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the selected actions (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub hooks: Option<Vec<String>>,

    /// Turn the listener off regardless of the settings file
    #[arg(long)]
    pub disable: bool,
}

impl SettingsSource {
    pub fn load(&self) -> anyhow::Result<TelemetrySettings> {
        let stored = match &self.config {
            Some(path) => TelemetrySettings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => TelemetrySettings::default(),
        };
        Ok(stored.merge(self.overrides()))
    }

    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            enable_telemetry_listener: self.disable.then_some(false),
            telemetry_hooks: self
                .hooks
                .as_ref()
                .map(|hooks| hooks.iter().map(|h| h.trim().to_string()).collect()),
            ..Default::default()
        }
    }
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub source: SettingsSource,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(transparent)]
struct Effective(TelemetrySettings);

impl fmt::Display for Effective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = toml::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

pub fn run(args: SettingsArgs) -> anyhow::Result<()> {
    let settings = args.source.load()?;
    output::print(&Effective(settings), args.format)
}
