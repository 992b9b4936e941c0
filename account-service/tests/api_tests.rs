//! End-to-end API tests against a spawned server and a per-test
//! database. They need a running Postgres (DATABASE_URL or the default
//! localhost instance), so they are ignored by default:
//! `cargo test -- --ignored` runs them.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn sign_up(app: &TestApp, email: &str, password: &str, name: &str) -> reqwest::Response {
    app.post("/auth/sign-up")
        .json(&json!({
            "email": email,
            "password": password,
            "name": name,
        }))
        .send()
        .await
        .expect("Failed to send sign-up request")
}

async fn sign_in(app: &TestApp, email: &str, password: &str) -> reqwest::Response {
    app.post("/auth/sign-in")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to send sign-in request")
}

async fn access_token(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Failed to parse body");
    body["data"]["access_token"]
        .as_str()
        .expect("Missing access_token")
        .to_string()
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_sign_up_sign_in_me_flow() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "e2e@test.com", "E2e@1234", "e2e user").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let signup_token = access_token(response).await;
    assert!(!signup_token.is_empty());

    let response = sign_in(&app, "e2e@test.com", "E2e@1234").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let signin_token = access_token(response).await;
    assert!(!signin_token.is_empty());

    let response = app
        .get_authenticated("/user/me", &signin_token)
        .send()
        .await
        .expect("Failed to send me request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["data"]["email"], "e2e@test.com");
    assert_eq!(body["data"]["name"], "e2e user");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_sign_up_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "dup@test.com", "Password1", "first").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Any password, same email.
    let response = sign_up(&app, "dup@test.com", "Different9", "second").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["data"]["message"], "Email already exists");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_sign_in_failures_are_uniform() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "alice@test.com", "Password1", "alice").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let wrong_password = sign_in(&app, "alice@test.com", "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    let wrong_password: Value = wrong_password.json().await.unwrap();

    let unknown_email = sign_in(&app, "nobody@test.com", "Password1").await;
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    let unknown_email: Value = unknown_email.json().await.unwrap();

    // Indistinguishable bodies: no account enumeration.
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["data"]["message"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_sign_up_validation_failures() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "not-an-email", "Password1", "name").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = sign_up(&app, "ok@test.com", "short", "name").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = sign_up(&app, "ok@test.com", "Password1", "   ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_email_is_case_insensitive() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "Mixed.Case@Test.COM", "Password1", "mixed").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Lowercase signin reaches the same account.
    let response = sign_in(&app, "mixed.case@test.com", "Password1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // And a different casing cannot register again.
    let response = sign_up(&app, "MIXED.CASE@test.com", "Password1", "again").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_issued_token_claims_match_account() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "claims@test.com", "Password1", "claims").await;
    let token = access_token(response).await;

    let claims = app
        .jwt_handler
        .decode(&token)
        .expect("Issued token must validate");
    assert_eq!(claims.email, "claims@test.com");
    assert!(uuid::Uuid::parse_str(&claims.sub).is_ok());
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_me_rejects_missing_and_invalid_tokens() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/user/me")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let missing: Value = response.json().await.unwrap();

    let response = app
        .get_authenticated("/user/me", "garbage.token.here")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let invalid: Value = response.json().await.unwrap();

    // Uniform rejection: the caller cannot tell why.
    assert_eq!(missing, invalid);
}
