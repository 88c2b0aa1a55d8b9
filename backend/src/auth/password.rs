//! Password hashing using bcrypt
//!
//! Each hash gets a fresh random salt; the work factor comes from
//! configuration.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Async callers use the `_async`
//! variants, which run on the blocking thread pool.

use crate::error::ConfigError;
use anyhow::Result;

/// Lowest and highest work factors bcrypt accepts
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Password hashing service
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Result<Self, ConfigError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(ConfigError::InvalidHashCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
