// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wpt catalog` - List instrumentable actions

use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use wpt_core::catalog;

#[derive(Args)]
pub struct CatalogArgs {
    /// List every known action instead of the defaults
    #[arg(long)]
    pub all: bool,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CatalogRow {
    name: &'static str,
    arity: usize,
    default: bool,
}

impl fmt::Display for CatalogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.default { "*" } else { "" };
        write!(f, "{:<48} {}{}", self.name, self.arity, marker)
    }
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let defaults = catalog::default_names();
    let rows: Vec<CatalogRow> = if args.all {
        catalog::all()
            .map(|d| CatalogRow {
                name: d.name,
                arity: d.arity,
                default: defaults.contains(d.name),
            })
            .collect()
    } else {
        catalog::defaults()
            .map(|d| CatalogRow {
                name: d.name,
                arity: d.arity,
                default: true,
            })
            .collect()
    };
    output::print_list(&rows, args.format)
}
