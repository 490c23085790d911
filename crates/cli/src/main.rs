// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wpt - telemetry listener CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{catalog, settings, simulate};

#[derive(Parser)]
#[command(
    name = "wpt",
    version,
    about = "Inspect and exercise the host action telemetry listener"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List instrumentable actions and their arities
    Catalog(catalog::CatalogArgs),
    /// Show the effective telemetry settings
    Settings(settings::SettingsArgs),
    /// Fire one request lifecycle and print the captured telemetry
    Simulate(simulate::SimulateArgs),
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog(args) => catalog::run(args),
        Commands::Settings(args) => settings::run(args),
        Commands::Simulate(args) => simulate::run(args),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Report panics without their payload, which may hold formatted action
/// arguments
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| match info.location() {
        Some(location) => tracing::error!(
            file = location.file(),
            line = location.line(),
            "panicked"
        ),
        None => tracing::error!("panicked"),
    }));
}
