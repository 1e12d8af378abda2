// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::{calculate_sip, sip_schedule};
use crate::config::Settings;
use crate::models::SipInput;
use crate::utils::{fmt_money, maybe_print_json, parse_number, pretty_table, required};
use anyhow::Result;
use serde_json::json;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let input = SipInput {
        monthly_amount: parse_number(&required::<String>(sub, "amount")?)?,
        annual_rate_percent: parse_number(&required::<String>(sub, "rate")?)?,
        years: required::<u32>(sub, "years")?,
    };
    log::debug!("sip input: {:?}", input);
    let result = calculate_sip(&input)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    if sub.get_flag("schedule") {
        let rows = sip_schedule(&input)?;
        if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
            let data = rows
                .iter()
                .map(|r| {
                    vec![
                        r.year.to_string(),
                        fmt_money(r.invested, settings, 0),
                        fmt_money(r.value, settings, 0),
                        fmt_money(r.gains, settings, 0),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Year", "Invested", "Value", "Gains"], data)
            );
        }
        return Ok(());
    }

    let payload = json!({ "input": input, "result": result });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let data = vec![
            vec!["Future Value".to_string(), fmt_money(result.future_value, settings, 0)],
            vec!["Total Invested".to_string(), fmt_money(result.total_invested, settings, 0)],
            vec!["Total Returns".to_string(), fmt_money(result.returns, settings, 0)],
        ];
        println!("{}", pretty_table(&["SIP", "Amount"], data));
    }
    Ok(())
}
