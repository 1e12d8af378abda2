// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl SipInput {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    pub fn months(&self) -> u64 {
        u64::from(self.years) * 12
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipResult {
    pub future_value: f64,
    pub total_invested: f64,
    pub returns: f64,
}

/// One row of a year-by-year SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipYear {
    pub year: u32,
    pub invested: f64,
    pub value: f64,
    pub gains: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CagrInput {
    pub initial_value: f64,
    pub final_value: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CagrResult {
    pub cagr_percent: f64,
    pub total_growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntradayInput {
    pub entry_price: f64,
    pub exit_price: f64,
    /// Signed share count; magnitudes above 2^53 are rejected.
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntradayResult {
    pub profit_per_share: f64,
    pub total_profit: f64,
    pub profit_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

/// Login / signup form. Signup-only fields are `None` on a login form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialForm {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

impl CredentialForm {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        CredentialForm {
            name: None,
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        CredentialForm {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages. A missing key means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// A signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}
