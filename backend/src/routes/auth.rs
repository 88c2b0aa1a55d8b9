//! Authentication routes
//!
//! Signup and login answer with a `Set-Cookie` session cookie and the
//! user's public profile. Logout only tells the browser to drop the cookie;
//! tokens already issued stay valid until they expire.

use crate::auth::{AuthUser, SessionCookie};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use credential_issuer_shared::{AuthResponse, LoginRequest, SignupRequest, UserProfile};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signUp", post(sign_up))
        .route("/logIn", post(log_in))
        .route("/logOut", post(log_out))
        .route("/me", get(get_profile))
}

fn cookie_headers(cookie: &SessionCookie) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie.to_header_value()?);
    Ok(headers)
}

/// Register a new user
///
/// POST /api/v1/auth/signUp
async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, HeaderMap, Json<AuthResponse>)> {
    let outcome = state.auth().sign_up(req).await?;

    let body = AuthResponse {
        user: outcome.new_user.to_profile(),
        expires_in: state.auth().jwt().expires_in_secs(),
    };
    Ok((StatusCode::CREATED, cookie_headers(&outcome.cookie)?, Json(body)))
}

/// Login with email and password
///
/// POST /api/v1/auth/logIn
async fn log_in(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(HeaderMap, Json<AuthResponse>)> {
    let outcome = state.auth().log_in(req).await?;

    let body = AuthResponse {
        user: outcome.user.to_profile(),
        expires_in: state.auth().jwt().expires_in_secs(),
    };
    Ok((cookie_headers(&outcome.cookie)?, Json(body)))
}

/// Clear the session cookie
///
/// POST /api/v1/auth/logOut
async fn log_out() -> ApiResult<(StatusCode, HeaderMap)> {
    Ok((StatusCode::NO_CONTENT, cookie_headers(&SessionCookie::cleared())?))
}

/// Get the current user
///
/// GET /api/v1/auth/me
///
/// # Authentication
/// Requires the session cookie or a Bearer token.
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let user = state.auth().current_user(auth_user.user_id).await?;
    Ok(Json(user.to_profile()))
}
