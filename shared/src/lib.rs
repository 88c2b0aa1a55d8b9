//! Credential Issuer Shared Library
//!
//! This crate contains the request/response types and signup validation
//! rules shared by the backend and its tests.

pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
pub use validation::PasswordPolicy;
