//! Input validation functions
//!
//! This module provides the signup validation rules. Email syntax checks
//! delegate to the `validator` crate; the password policy is a plain value
//! so its thresholds can come from configuration.

use crate::errors::ValidationError;
use crate::types::SignupRequest;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Inclusive bounds on full name length, counted in characters
pub const FULL_NAME_MIN_CHARS: usize = 3;
pub const FULL_NAME_MAX_CHARS: usize = 50;

/// Maximum stored email length
pub const EMAIL_MAX_LEN: usize = 255;

/// Signup fields after the presence check
#[derive(Debug, Clone, Copy)]
pub struct SignupFields<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

/// Password strength policy
///
/// Defaults mirror the common "strong password" rule: at least 8
/// characters with one lowercase letter, one uppercase letter, one digit
/// and one symbol. Letters and digits are ASCII only; a symbol is ASCII
/// punctuation, a space or `£`. Other characters count toward the length
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    /// bcrypt ignores input past 72 bytes
    pub max_bytes: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_lowercase: 1,
            min_uppercase: 1,
            min_digits: 1,
            min_symbols: 1,
            max_bytes: 72,
        }
    }
}

impl PasswordPolicy {
    /// Check a password against the policy
    pub fn check(&self, password: &str) -> Result<(), ValidationError> {
        if password.len() > self.max_bytes {
            return Err(ValidationError::WeakPassword);
        }

        let (mut length, mut lower, mut upper, mut digits, mut symbols) = (0, 0, 0, 0, 0);
        for c in password.chars() {
            length += 1;
            if c.is_ascii_lowercase() {
                lower += 1;
            } else if c.is_ascii_uppercase() {
                upper += 1;
            } else if c.is_ascii_digit() {
                digits += 1;
            } else if is_symbol(c) {
                symbols += 1;
            }
        }

        let strong = length >= self.min_length
            && lower >= self.min_lowercase
            && upper >= self.min_uppercase
            && digits >= self.min_digits
            && symbols >= self.min_symbols;

        if strong {
            Ok(())
        } else {
            Err(ValidationError::WeakPassword)
        }
    }
}

fn is_symbol(c: char) -> bool {
    c.is_ascii_punctuation() || c == ' ' || c == '£'
}

/// A top-level label is two or more letters, or an IDNA `xn--` label
fn is_tld(label: &str) -> bool {
    if let Some(rest) = label.strip_prefix("xn--") {
        return !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    }
    label.chars().count() >= 2 && label.chars().all(char::is_alphabetic)
}

/// Validate email format
///
/// Requires a syntactically valid address on a named domain with an
/// alphabetic top-level label. `user@localhost`, `a@example.123` and
/// IP literals such as `user@[127.0.0.1]` are rejected.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.len() > EMAIL_MAX_LEN {
        return Err(ValidationError::InvalidEmail);
    }
    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if domain.starts_with('[') {
        return Err(ValidationError::InvalidEmail);
    }
    let has_tld = domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && is_tld(tld));
    if !has_tld {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate full name length
pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    let len = full_name.chars().count();
    if !(FULL_NAME_MIN_CHARS..=FULL_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::InvalidFullName);
    }
    Ok(())
}

/// Run the full signup validation sequence
///
/// Checks run in order (presence, email, password, full name) and the
/// first failure is returned.
pub fn validate_signup<'a>(
    request: &'a SignupRequest,
    policy: &PasswordPolicy,
) -> Result<SignupFields<'a>, ValidationError> {
    let present = |field: &'a Option<String>| field.as_deref().filter(|v| !v.is_empty());

    let (Some(email), Some(password), Some(full_name)) = (
        present(&request.email),
        present(&request.password),
        present(&request.full_name),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    validate_email(email)?;
    policy.check(password)?;
    validate_full_name(full_name)?;

    Ok(SignupFields {
        email,
        password,
        full_name,
    })
}
