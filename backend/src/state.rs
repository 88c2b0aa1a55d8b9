//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! State is built once at startup and is read-only afterwards. Building it
//! fails if the auth service cannot be configured, so a server without a
//! signing secret never starts accepting requests.

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::repositories::UserStore;
use crate::services::AuthService;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Credential issuance service with pre-computed signing keys
    pub auth: AuthService,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> Result<Self, ConfigError> {
        let auth = AuthService::new(store, &config)?;

        Ok(Self {
            config: Arc::new(config),
            auth,
        })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the auth service
    #[inline]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
