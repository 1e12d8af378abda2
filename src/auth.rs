// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{AuthError, SubmitError};
use crate::models::{CredentialForm, FormMode, User};
use crate::validation::validate;

/// Email/password backend behind the login and signup forms.
pub trait AuthProvider {
    fn sign_up(&mut self, email: &str, password: &str, full_name: &str) -> Result<User, AuthError>;
    fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    fn sign_out(&mut self) -> Result<(), AuthError>;
    fn current_session(&self) -> Option<User>;
}

/// Validates `form` and, only if it is clean, forwards it to `provider`.
pub fn submit<P: AuthProvider + ?Sized>(
    provider: &mut P,
    form: &CredentialForm,
    mode: FormMode,
) -> Result<User, SubmitError> {
    let errors = validate(form, mode);
    if !errors.is_empty() {
        return Err(SubmitError::Validation(errors));
    }
    let email = form.email.trim();
    let user = match mode {
        FormMode::Login => provider.sign_in(email, &form.password)?,
        FormMode::Signup => {
            let name = form.name.as_deref().unwrap_or("").trim();
            provider.sign_up(email, &form.password, name)?
        }
    };
    Ok(user)
}
