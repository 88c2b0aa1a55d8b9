//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the user store and token issuance.

pub mod auth;

pub use auth::{AuthService, LogInOutcome, SignUpOutcome};
