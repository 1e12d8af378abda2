// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use thiserror::Error;

use crate::models::ValidationErrors;

/// What was wrong with a calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    NotFinite,
    NotPositive,
    Zero,
    TooLarge,
    Overflow,
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputIssue::NotFinite => "must be a finite number",
            InputIssue::NotPositive => "must be greater than zero",
            InputIssue::Zero => "must not be zero",
            InputIssue::TooLarge => "is too large to represent exactly (limit 2^53)",
            InputIssue::Overflow => "produced a result that is not finite",
        };
        f.write_str(s)
    }
}

/// Errors raised by the calculators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid input: {field} {issue}")]
    InvalidInput {
        field: &'static str,
        issue: InputIssue,
    },
}

impl CalcError {
    pub fn invalid(field: &'static str, issue: InputIssue) -> Self {
        CalcError::InvalidInput { field, issue }
    }
}

/// Errors reported by an authentication provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error("user already registered: {0}")]
    AlreadyRegistered(String),
    #[error("no active session")]
    NoSession,
    #[error("auth provider error: {0}")]
    Provider(String),
}

/// Outcome of submitting a credential form that did not produce a user.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(ValidationErrors),
    #[error(transparent)]
    Auth(#[from] AuthError),
}
