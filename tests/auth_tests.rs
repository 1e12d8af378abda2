// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use investkit::auth::{AuthProvider, submit};
use investkit::error::{AuthError, SubmitError};
use investkit::models::{CredentialForm, Field, FormMode, User};

#[derive(Default)]
struct FakeAuth {
    accounts: HashMap<String, (String, User)>,
    session: Option<User>,
    calls: usize,
}

impl AuthProvider for FakeAuth {
    fn sign_up(&mut self, email: &str, password: &str, full_name: &str) -> Result<User, AuthError> {
        self.calls += 1;
        if self.accounts.contains_key(email) {
            return Err(AuthError::AlreadyRegistered(email.to_string()));
        }
        let user = User {
            id: format!("user-{}", self.accounts.len() + 1),
            email: email.to_string(),
            full_name: Some(full_name.to_string()),
        };
        self.accounts
            .insert(email.to_string(), (password.to_string(), user.clone()));
        self.session = Some(user.clone());
        Ok(user)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.calls += 1;
        match self.accounts.get(email) {
            Some((pw, user)) if pw == password => {
                self.session = Some(user.clone());
                Ok(user.clone())
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        self.session.take().map(|_| ()).ok_or(AuthError::NoSession)
    }

    fn current_session(&self) -> Option<User> {
        self.session.clone()
    }
}

#[test]
fn invalid_form_never_reaches_provider() {
    let mut auth = FakeAuth::default();
    let err = submit(&mut auth, &CredentialForm::login("", ""), FormMode::Login).unwrap_err();
    match err {
        SubmitError::Validation(errors) => {
            assert!(errors.contains(Field::Email));
            assert!(errors.contains(Field::Password));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(auth.calls, 0);
}

#[test]
fn signup_then_login_round_trip() {
    let mut auth = FakeAuth::default();
    let form = CredentialForm::signup(" Asha Rao ", "asha@example.com", "Abcdef1!", "Abcdef1!");
    let user = submit(&mut auth, &form, FormMode::Signup).unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Asha Rao"));
    assert_eq!(auth.current_session(), Some(user.clone()));

    auth.sign_out().unwrap();
    assert!(auth.current_session().is_none());
    assert_eq!(auth.sign_out().unwrap_err(), AuthError::NoSession);

    let login = CredentialForm::login("asha@example.com", "Abcdef1!");
    let again = submit(&mut auth, &login, FormMode::Login).unwrap();
    assert_eq!(again, user);
}

#[test]
fn provider_errors_are_passed_through() {
    let mut auth = FakeAuth::default();
    let login = CredentialForm::login("nobody@example.com", "Abcdef1!");
    let err = submit(&mut auth, &login, FormMode::Login).unwrap_err();
    assert!(matches!(err, SubmitError::Auth(AuthError::InvalidCredentials)));

    let form = CredentialForm::signup("A", "a@b.com", "Abcdef1!", "Abcdef1!");
    submit(&mut auth, &form, FormMode::Signup).unwrap();
    let err = submit(&mut auth, &form, FormMode::Signup).unwrap_err();
    assert_eq!(err.to_string(), "user already registered: a@b.com");
}

#[test]
fn works_through_trait_object() {
    let mut auth: Box<dyn AuthProvider> = Box::new(FakeAuth::default());
    let form = CredentialForm::signup("A", "a@b.com", "Abcdef1!", "Abcdef1!");
    let user = submit(auth.as_mut(), &form, FormMode::Signup).unwrap();
    assert_eq!(user.email, "a@b.com");
}
