//! JWT token generation and validation
//!
//! Session tokens are HS256-signed claims whose subject is the user ID.
//! Keys are derived once from the configured secret and shared via Arc.

use crate::error::ConfigError;
use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// A freshly signed token and its lifetime in seconds
#[derive(Debug, Clone)]
pub struct TokenData {
    pub token: String,
    pub expires_in: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: Arc::new(EncodingKey::from_secret(bytes)),
            decoding: Arc::new(DecodingKey::from_secret(bytes)),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Construct once at startup; clones share the same keys.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expires_in_secs: i64,
}

impl JwtService {
    /// Create a JWT service, failing if the secret is absent or empty
    pub fn new(secret: Option<&SecretString>, expires_in_secs: i64) -> Result<Self, ConfigError> {
        let secret = secret
            .filter(|s| !s.expose_secret().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;
        if expires_in_secs <= 0 {
            return Err(ConfigError::InvalidTokenExpiry(expires_in_secs));
        }

        Ok(Self {
            keys: JwtKeys::new(secret),
            expires_in_secs,
        })
    }

    /// Sign a session token for a user
    pub fn issue(&self, user_id: Uuid) -> Result<TokenData> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))?;

        Ok(TokenData {
            token,
            expires_in: self.expires_in_secs,
        })
    }

    /// Validate a token and return claims
    #[inline]
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expires_in_secs(&self) -> i64 {
        self.expires_in_secs
    }
}
