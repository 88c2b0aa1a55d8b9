//! Integration tests for signup, login and session cookies

mod common;

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use serde_json::json;

const PASSWORD: &str = "SecurePassword123!";

fn unique_email() -> String {
    format!("{}_{}", uuid::Uuid::new_v4().simple(), SafeEmail().fake::<String>())
}

fn signup(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": PASSWORD,
        "fullName": "Integration Tester"
    })
}

#[tokio::test]
async fn test_signup_issues_session_cookie() {
    let app = common::TestApp::in_memory();
    let email = unique_email();

    let response = app.post("/api/v1/auth/signUp", &signup(&email)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["email"], email.as_str());
    let cookie = response.set_cookie.expect("cookie");
    assert!(cookie.ends_with("HttpOnly; Secure; SameSite=Strict; Max-Age=3600"));
}

#[tokio::test]
async fn test_signup_cookie_authenticates_me() {
    let app = common::TestApp::in_memory();
    let email = unique_email();

    let signed_up = app.post("/api/v1/auth/signUp", &signup(&email)).await;
    let cookie = signed_up.set_cookie.expect("cookie");

    let me = app.get("/api/v1/auth/me", Some(common::cookie_pair(&cookie))).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["id"], signed_up.body["user"]["id"]);
    assert_eq!(me.body["fullName"], "Integration Tester");
}

#[tokio::test]
async fn test_concurrent_duplicate_signups() {
    let app = common::TestApp::in_memory();
    let email = unique_email();
    let body = signup(&email);

    let (a, b) = tokio::join!(
        app.post("/api/v1/auth/signUp", &body),
        app.post("/api/v1/auth/signUp", &body)
    );

    let mut statuses = [a.status.as_u16(), b.status.as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [201, 409]);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = common::TestApp::in_memory();

    let response = app
        .post(
            "/api/v1/auth/logIn",
            &json!({"email": "nobody@example.com", "password": PASSWORD}),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_liveness() {
    let app = common::TestApp::in_memory();
    let response = app.get("/health/live", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_postgres_signup_and_duplicate() {
    let app = common::TestApp::postgres().await;
    let email = unique_email();

    let first = app.post("/api/v1/auth/signUp", &signup(&email)).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.post("/api/v1/auth/signUp", &signup(&email)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_postgres_concurrent_signups_one_winner() {
    let app = common::TestApp::postgres().await;
    let email = unique_email();
    let body = signup(&email);

    let (a, b) = tokio::join!(
        app.post("/api/v1/auth/signUp", &body),
        app.post("/api/v1/auth/signUp", &body)
    );

    let created = [a.status, b.status]
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1);

    let pool = app.pool.as_ref().unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_postgres_login_and_readiness() {
    let app = common::TestApp::postgres().await;
    let email = unique_email();
    app.post("/api/v1/auth/signUp", &signup(&email)).await;

    let login = app
        .post("/api/v1/auth/logIn", &json!({"email": email, "password": PASSWORD}))
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let ready = app.get("/health/ready", None).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["checks"]["store"]["status"], "healthy");
}
