//! Session cookie construction and parsing

use super::jwt::TokenData;
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use std::fmt;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "Authorization";

/// Serialized `Set-Cookie` value for a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Build the cookie: HttpOnly, Secure, SameSite=Strict, Max-Age = token lifetime
    pub fn from_token(data: &TokenData) -> Self {
        Self(format!(
            "{}={}; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
            SESSION_COOKIE_NAME, data.token, data.expires_in
        ))
    }

    /// Empty cookie that makes the browser drop the session
    pub fn cleared() -> Self {
        Self(format!(
            "{}=; HttpOnly; Secure; SameSite=Strict; Max-Age=0",
            SESSION_COOKIE_NAME
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header value for `Set-Cookie`
    pub fn to_header_value(&self) -> anyhow::Result<HeaderValue> {
        HeaderValue::from_str(&self.0).map_err(|e| anyhow::anyhow!("Invalid cookie value: {}", e))
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the session token in a request's `Cookie` headers
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}
