// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CredentialForm, Field, FormMode, ValidationErrors};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_WEAK: &str = "Password must contain at least one lowercase letter, one uppercase letter, one number, and one special character";
pub const NAME_REQUIRED: &str = "Full name is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?`~";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True when the password has a lowercase letter, an uppercase letter,
/// a digit and one of the accepted special characters.
pub fn has_required_classes(password: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;
    for c in password.chars() {
        lower |= c.is_ascii_lowercase();
        upper |= c.is_ascii_uppercase();
        digit |= c.is_ascii_digit();
        special |= SPECIAL_CHARS.contains(c);
    }
    lower && upper && digit && special
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else if !has_required_classes(password) {
        Some(PASSWORD_WEAK)
    } else {
        None
    }
}

/// Checks every field of `form` and collects one message per invalid field.
/// Name and confirmation are only checked in signup mode.
pub fn validate(form: &CredentialForm, mode: FormMode) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Some(msg) = email_error(&form.email) {
        errors.insert(Field::Email, msg);
    }
    if let Some(msg) = password_error(&form.password) {
        errors.insert(Field::Password, msg);
    }

    if mode == FormMode::Signup {
        let name = form.name.as_deref().unwrap_or("");
        if name.trim().is_empty() {
            errors.insert(Field::Name, NAME_REQUIRED);
        }
        match form.confirm_password.as_deref() {
            None | Some("") => errors.insert(Field::ConfirmPassword, CONFIRM_REQUIRED),
            Some(confirm) if confirm != form.password => {
                errors.insert(Field::ConfirmPassword, PASSWORD_MISMATCH)
            }
            Some(_) => {}
        }
    }

    errors
}
