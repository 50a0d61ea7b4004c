//! Input validation helpers
//!
//! Request payloads carry `validator` derive rules; [`check`] runs them and
//! flattens the per-field failures into the error envelope's `errors` list.
//! Charset rules that yup expressed as regexes are custom functions here,
//! so no regex engine is pulled in for two character classes.

use std::borrow::Cow;
use std::str::FromStr;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::db::models::Role;
use crate::utils::{AppError, AppResult};

/// Validate a payload, collecting every field error (no early abort)
pub fn check<T: Validate>(value: &T) -> AppResult<()> {
    value.validate().map_err(into_app_error)
}

fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            match &err.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages.sort();
    AppError::Validation(messages)
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Usernames are ASCII alphanumeric only
pub fn validate_username_charset(username: &str) -> Result<(), ValidationError> {
    if !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(invalid("username_charset", "Username must be alphanumeric only"))
    }
}

/// Phone numbers: digits, spaces, and `+-()` separators
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')');
    if !phone.trim().is_empty() && phone.chars().all(allowed) {
        Ok(())
    } else {
        Err(invalid("phone_format", "Phone number format is invalid"))
    }
}

/// Roles are restricted to the [`Role`] enum
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    Role::from_str(role)
        .map(|_| ())
        .map_err(|_| invalid("role", "Role must be either admin or user"))
}
