// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::calculate_intraday;
use crate::config::Settings;
use crate::models::IntradayInput;
use crate::utils::{
    fmt_money, fmt_signed_percent, maybe_print_json, parse_number, pretty_table, required,
};
use anyhow::Result;
use serde_json::json;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let input = IntradayInput {
        entry_price: parse_number(&required::<String>(sub, "entry")?)?,
        exit_price: parse_number(&required::<String>(sub, "exit")?)?,
        quantity: required::<i64>(sub, "quantity")?,
    };
    log::debug!("intraday input: {:?}", input);
    let result = calculate_intraday(&input)?;

    let payload = json!({ "input": input, "result": result });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        let dp = settings.decimals;
        let data = vec![
            vec!["Per Share".to_string(), fmt_money(result.profit_per_share, settings, dp)],
            vec!["Total P&L".to_string(), fmt_money(result.total_profit, settings, dp)],
            vec!["Return %".to_string(), fmt_signed_percent(result.profit_percent, dp)],
        ];
        println!("{}", pretty_table(&["Intraday", "Value"], data));
    }
    Ok(())
}
