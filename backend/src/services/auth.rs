//! Credential issuance service
//!
//! Signup runs a linear pipeline: validate, check for an existing email,
//! hash, persist, sign a session token, build the cookie. Every stage
//! short-circuits on failure and nothing is persisted before the hash is
//! computed.
//!
//! The existing-email lookup only gives a friendlier error. Under
//! concurrent signups the store's uniqueness constraint decides the winner
//! and the loser surfaces as a `Conflict` from `create_user`.

use crate::auth::{JwtService, PasswordService, SessionCookie};
use crate::config::AppConfig;
use crate::error::{ApiError, ConfigError, DUPLICATE_EMAIL_MESSAGE};
use crate::repositories::{NewUser, UserRecord, UserStore};
use credential_issuer_shared::validation::validate_signup;
use credential_issuer_shared::{AuthError, LoginRequest, PasswordPolicy, SignupRequest};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Result of a successful signup
#[derive(Debug)]
pub struct SignUpOutcome {
    pub cookie: SessionCookie,
    pub new_user: UserRecord,
}

/// Result of a successful login
#[derive(Debug)]
pub struct LogInOutcome {
    pub cookie: SessionCookie,
    pub user: UserRecord,
}

/// Issues credentials against an injected user store
///
/// Construct once at startup with [`AuthService::new`]; clones share the
/// store handle and the signing keys.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    jwt: JwtService,
    hasher: PasswordService,
    policy: Arc<PasswordPolicy>,
}

impl AuthService {
    /// Build the service, refusing to start without a signing secret
    pub fn new(store: Arc<dyn UserStore>, config: &AppConfig) -> Result<Self, ConfigError> {
        let (jwt, hasher) = Self::issuers(config)?;

        Ok(Self {
            store,
            jwt,
            hasher,
            policy: Arc::new(config.password.policy.clone()),
        })
    }

    /// Check the signing and hashing settings without a store
    ///
    /// Lets startup report a bad secret or cost before opening connections.
    pub fn check_config(config: &AppConfig) -> Result<(), ConfigError> {
        Self::issuers(config).map(|_| ())
    }

    fn issuers(config: &AppConfig) -> Result<(JwtService, PasswordService), ConfigError> {
        let secret = config.jwt.secret.clone().map(SecretString::new);
        let jwt = JwtService::new(secret.as_ref(), config.jwt.expires_in_secs)?;
        let hasher = PasswordService::new(config.password.hash_cost)?;
        Ok((jwt, hasher))
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Register a new user and issue a session cookie
    #[instrument(skip_all)]
    pub async fn sign_up(&self, request: SignupRequest) -> Result<SignUpOutcome, ApiError> {
        let fields = validate_signup(&request, &self.policy).map_err(|e| {
            debug!(reason = %e, "Signup rejected");
            e
        })?;

        if self.store.find_user_by_email(fields.email).await?.is_some() {
            debug!("Signup rejected: email already registered");
            return Err(ApiError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let password_hash = self.hasher.hash_async(fields.password.to_string()).await?;

        let new_user = self
            .store
            .create_user(NewUser {
                email: fields.email.to_string(),
                full_name: fields.full_name.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create user");
                e
            })?;

        let cookie = self.issue_cookie(new_user.id)?;
        info!(user_id = %new_user.id, "User signed up");

        Ok(SignUpOutcome { cookie, new_user })
    }

    /// Verify credentials and issue a session cookie
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip_all)]
    pub async fn log_in(&self, request: LoginRequest) -> Result<LogInOutcome, ApiError> {
        let user = self
            .store
            .find_user_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid =
            PasswordService::verify_async(request.password, user.password_hash.clone()).await?;
        if !valid {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let cookie = self.issue_cookie(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(LogInOutcome { cookie, user })
    }

    /// Look up the user a session token belongs to
    pub async fn current_user(&self, user_id: Uuid) -> Result<UserRecord, ApiError> {
        self.store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    fn issue_cookie(&self, user_id: Uuid) -> Result<SessionCookie, ApiError> {
        let token = self.jwt.issue(user_id)?;
        Ok(SessionCookie::from_token(&token))
    }
}
