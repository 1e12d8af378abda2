// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::config::{Grouping, Settings};

pub fn parse_number(s: &str) -> Result<f64> {
    let v = s
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .with_context(|| format!("Invalid number '{}'", s))?;
    if !v.is_finite() {
        anyhow::bail!("Invalid number '{}', expected a finite value", s);
    }
    Ok(v)
}

/// Fetches a required argument that clap has already type-checked.
pub fn required<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, id: &str) -> Result<T> {
    m.get_one::<T>(id)
        .cloned()
        .with_context(|| format!("Missing required argument '--{}'", id))
}

/// Inserts separators into a string of ASCII digits.
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::International => 3,
    };
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn grouped_abs(v: f64, decimals: usize, grouping: Grouping) -> (bool, String) {
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let mut out = group_digits(int_part, grouping);
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    (v < 0.0 && !is_zero, out)
}

/// `₹11,61,695` style amount; the sign goes before the symbol.
pub fn fmt_money(v: f64, settings: &Settings, decimals: usize) -> String {
    let (neg, body) = grouped_abs(v, decimals, settings.grouping);
    format!("{}{}{}", if neg { "-" } else { "" }, settings.currency_symbol, body)
}

pub fn fmt_percent(v: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, v)
}

/// Percent change with an explicit `+` for gains, e.g. `+5.00%`.
pub fn fmt_signed_percent(v: f64, decimals: usize) -> String {
    let body = fmt_percent(v.abs(), decimals);
    let is_zero = body.chars().all(|c| c == '0' || c == '.' || c == '%');
    if is_zero || v > 0.0 {
        format!("+{}", body)
    } else {
        format!("-{}", body)
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
