//! Error types for the Credential Issuer application

use thiserror::Error;

/// Signup input validation failures
///
/// Messages are user-facing and returned verbatim in 400 responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields must be filled.")]
    MissingFields,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Password does not meet the required criteria.")]
    WeakPassword,

    #[error("Name must be between 3 to 50 characters.")]
    InvalidFullName,
}

/// Authentication error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}
