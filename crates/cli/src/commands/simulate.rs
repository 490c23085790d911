// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wpt simulate` - Run one request lifecycle through the listener

use super::settings::SettingsSource;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use wpt_adapters::{
    HookRegistry, StaticSite, Telemeter, TelemeterConfig, Theme, TracedHost, TracedSink,
};
use wpt_core::catalog;
use wpt_core::{Object, TelemetryEvent, TelemetrySettings, Value};
use wpt_engine::{default_custom_handlers, InitReport, Listener};

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub source: SettingsSource,

    /// Active theme followed by its parents (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub theme: Vec<String>,

    /// Active plugins (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub plugins: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct Simulation {
    pub report: InitReport,
    /// Number of host actions fired
    pub fired: usize,
    pub events: Vec<TelemetryEvent>,
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.report.enabled {
            return writeln!(f, "telemetry listener disabled");
        }
        writeln!(
            f,
            "attached: {}  skipped: {}  rejected: {}  fired: {}",
            self.report.attached.len(),
            self.report.skipped.len(),
            self.report.rejected.len(),
            self.fired
        )?;
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// Arguments the host passes for actions whose trailing arguments are secret
fn host_args(action: &str) -> Option<Vec<Value>> {
    let user = Value::from(Object::new("WP_User").with("id", 1));
    match action {
        "password_reset" => Some(vec![user, Value::from("hunter2")]),
        "wp_authenticate" => Some(vec![Value::from("admin"), Value::from("hunter2")]),
        _ => None,
    }
}

/// Sample arguments for an action fired with `arity` arguments
fn sample_args(action: &str, arity: usize) -> Vec<Value> {
    if let Some(args) = host_args(action) {
        return args;
    }
    let palette = [
        Value::from(Object::new("WP_Post").with("id", 42)),
        Value::from("sample"),
        Value::from(7),
        Value::from(true),
        Value::from(vec![1, 2, 3]),
        Value::Null,
    ];
    palette.iter().cycle().take(arity).cloned().collect()
}

/// Initialize a listener against an in-memory host and fire every
/// instrumented action once, in lifecycle order
pub fn simulate(settings: TelemetrySettings, site: StaticSite) -> anyhow::Result<Simulation> {
    let registry = HookRegistry::new();
    let telemeter = Arc::new(Telemeter::new(TelemeterConfig::from(&settings)));

    let mut listener = Listener::new(
        Arc::new(settings),
        Arc::new(TracedHost::new(registry.clone())),
        Some(Arc::new(TracedSink::new(Arc::clone(&telemeter)))),
    );
    let report = listener.initialize(default_custom_handlers(Arc::new(site)))?;

    let mut fired = 0;
    for descriptor in catalog::lifecycle().filter(|d| registry.has_action(d.name)) {
        let args = sample_args(descriptor.name, descriptor.arity);
        registry.do_action(descriptor.name, &args);
        fired += 1;
    }
    tracing::debug!(fired, "lifecycle complete");

    Ok(Simulation {
        report,
        fired,
        events: telemeter.copy_events(),
    })
}

pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let settings = args.source.load()?;
    let mut site = StaticSite::new().with_plugins(args.plugins);
    if let Some(theme) = Theme::from_chain(args.theme) {
        site = site.with_theme(theme);
    }

    let simulation = simulate(settings, site)?;
    output::print(&simulation, args.format)
}

#[cfg(test)]
#[path = "simulate_tests.rs"]
mod tests;
