// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use investkit::{cli, commands, config};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(sub);
    }

    let settings = config::load()?;
    log::debug!("Loaded settings: {:?}", settings);

    match matches.subcommand() {
        Some(("sip", sub)) => commands::sip::handle(&settings, sub)?,
        Some(("cagr", sub)) => commands::cagr::handle(&settings, sub)?,
        Some(("intraday", sub)) => commands::intraday::handle(&settings, sub)?,
        Some(("validate", sub)) => commands::validate::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
