// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print result as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print result as JSON lines"),
    )
}

fn number(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .required(true)
        .allow_negative_numbers(true)
        .help(help)
}

fn credential_args(cmd: Command, signup: bool) -> Command {
    let cmd = cmd
        .arg(Arg::new("email").long("email").default_value("").help("Email address"))
        .arg(Arg::new("password").long("password").default_value("").help("Password"));
    if signup {
        cmd.arg(Arg::new("name").long("name").default_value("").help("Full name"))
            .arg(
                Arg::new("confirm-password")
                    .long("confirm-password")
                    .default_value("")
                    .help("Password confirmation"),
            )
    } else {
        cmd
    }
}

pub fn build_cli() -> Command {
    clap::command!()
        .name("investkit")
        .about("SIP, CAGR and intraday P&L calculators")
        .subcommand(json_flags(
            Command::new("sip")
                .about("Project the future value of a monthly SIP")
                .arg(number("amount", "Monthly investment"))
                .arg(number("rate", "Expected annual return in percent"))
                .arg(
                    Arg::new("years")
                        .long("years")
                        .required(true)
                        .value_parser(value_parser!(u32))
                        .help("Investment period in whole years"),
                )
                .arg(
                    Arg::new("schedule")
                        .long("schedule")
                        .action(ArgAction::SetTrue)
                        .help("Show a year-by-year breakdown"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("cagr")
                .about("Compound annual growth rate between two values")
                .arg(number("initial", "Initial investment"))
                .arg(number("final", "Final value"))
                .arg(number("years", "Investment period in years")),
        ))
        .subcommand(json_flags(
            Command::new("intraday")
                .about("Estimate intraday profit and loss")
                .arg(number("entry", "Entry price"))
                .arg(number("exit", "Exit price"))
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Shares traded; negative for a short position"),
                ),
        ))
        .subcommand(
            Command::new("validate")
                .about("Check login or signup form fields")
                .subcommand_required(true)
                .subcommand(json_flags(credential_args(
                    Command::new("login").about("Validate a login form"),
                    false,
                )))
                .subcommand(json_flags(credential_args(
                    Command::new("signup").about("Validate a signup form"),
                    true,
                ))),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change display settings")
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(Command::new("path").about("Print the settings file location"))
                .subcommand(
                    Command::new("set")
                        .about("Update settings")
                        .arg(Arg::new("currency-symbol").long("currency-symbol"))
                        .arg(
                            Arg::new("grouping")
                                .long("grouping")
                                .help("indian or international"),
                        )
                        .arg(
                            Arg::new("decimals")
                                .long("decimals")
                                .value_parser(value_parser!(usize)),
                        ),
                ),
        )
}
