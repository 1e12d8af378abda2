// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CredentialForm, FormMode};
use crate::utils::{maybe_print_json, pretty_table, required};
use crate::validation::validate;
use anyhow::{Result, bail};
use serde_json::json;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let form = CredentialForm::login(
                required::<String>(sub, "email")?,
                required::<String>(sub, "password")?,
            );
            check(sub, &form, FormMode::Login)
        }
        Some(("signup", sub)) => {
            let form = CredentialForm::signup(
                required::<String>(sub, "name")?,
                required::<String>(sub, "email")?,
                required::<String>(sub, "password")?,
                required::<String>(sub, "confirm-password")?,
            );
            check(sub, &form, FormMode::Signup)
        }
        _ => Ok(()),
    }
}

fn check(sub: &clap::ArgMatches, form: &CredentialForm, mode: FormMode) -> Result<()> {
    let errors = validate(form, mode);
    log::debug!("{:?} form: {} error(s)", mode, errors.len());

    let payload = json!({ "valid": errors.is_empty(), "errors": errors });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        if errors.is_empty() {
            println!("Form is valid");
        } else {
            let data = errors
                .iter()
                .map(|(field, msg)| vec![field.to_string(), msg.to_string()])
                .collect();
            println!("{}", pretty_table(&["Field", "Error"], data));
        }
    }
    if !errors.is_empty() {
        bail!("Form has {} invalid field(s)", errors.len());
    }
    Ok(())
}
