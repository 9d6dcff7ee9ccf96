// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credentials and auth endpoint payloads.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Symbols accepted (and one required) in a new password.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Registration {
    #[validate(length(min = 3, message = "Username must be at least 3 characters long."))]
    pub username: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Successful response of the register, login and guest login endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
}

/// Error payloads of the auth endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthErrorBody {
    /// Per-field validation messages
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthErrorBody {
    /// Flatten field errors into "field: message" lines.
    pub fn field_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{}: {}", field, m)))
            .collect()
    }
}

/// At least 8 characters of letters, digits and [`PASSWORD_SYMBOLS`], with
/// one of each kind.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));
    let strong = password.chars().count() >= 8
        && allowed
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if strong {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength").with_message(Cow::Borrowed(
            "Password must be at least 8 characters long, include at least one letter, \
             one number, and one special character.",
        )))
    }
}

/// Collect validation messages in a stable (field name) order.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}
