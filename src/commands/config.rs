// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Grouping, Settings, config_path, load_from, save_to};
use crate::utils::pretty_table;
use anyhow::Result;
use std::path::Path;

/// Runs without preloaded settings so a broken file can still be located
/// and rewritten.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    handle_at(&config_path()?, m)
}

pub fn handle_at(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("path", _)) => println!("{}", path.display()),
        Some(("set", sub)) => set(path, sub)?,
        _ => show(&load_from(path)?),
    }
    Ok(())
}

fn show(settings: &Settings) {
    let grouping = match settings.grouping {
        Grouping::Indian => "indian",
        Grouping::International => "international",
    };
    let data = vec![
        vec!["currency_symbol".to_string(), settings.currency_symbol.clone()],
        vec!["grouping".to_string(), grouping.to_string()],
        vec!["decimals".to_string(), settings.decimals.to_string()],
    ];
    println!("{}", pretty_table(&["Key", "Value"], data));
}

fn set(path: &Path, sub: &clap::ArgMatches) -> Result<()> {
    let mut settings = match load_from(path) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{:#}; starting from defaults", e);
            Settings::default()
        }
    };
    if let Some(sym) = sub.get_one::<String>("currency-symbol") {
        settings.currency_symbol = sym.trim().to_string();
    }
    if let Some(g) = sub.get_one::<String>("grouping") {
        settings.grouping = g.parse()?;
    }
    if let Some(dp) = sub.get_one::<usize>("decimals") {
        settings.decimals = *dp;
    }
    save_to(path, &settings)?;
    show(&settings);
    Ok(())
}
