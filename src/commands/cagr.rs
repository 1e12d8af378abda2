// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::calculate_cagr;
use crate::config::Settings;
use crate::models::CagrInput;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_number, pretty_table, required};
use anyhow::Result;
use serde_json::json;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let input = CagrInput {
        initial_value: parse_number(&required::<String>(sub, "initial")?)?,
        final_value: parse_number(&required::<String>(sub, "final")?)?,
        years: parse_number(&required::<String>(sub, "years")?)?,
    };
    log::debug!("cagr input: {:?}", input);
    let result = calculate_cagr(&input)?;

    let payload = json!({ "input": input, "result": result });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        let data = vec![
            vec!["CAGR".to_string(), fmt_percent(result.cagr_percent, settings.decimals)],
            vec!["Total Growth".to_string(), fmt_money(result.total_growth, settings, settings.decimals)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}
