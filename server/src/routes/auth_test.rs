use super::*;
use crate::routes::tests::body_json;
use crate::state::test_helpers;

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_long_lived() {
    let cookie = session_cookie("abc".into(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// Role checks
// =============================================================================

#[test]
fn require_role_allows_listed_roles_only() {
    assert!(require_role(Role::Admin, &[Role::Admin]).is_ok());
    assert_eq!(require_role(Role::User, &[Role::Admin]), Err(StatusCode::FORBIDDEN));
    assert!(require_role(Role::User, &[Role::User, Role::Admin]).is_ok());
}

// =============================================================================
// Error mapping
// =============================================================================

#[test]
fn account_errors_map_to_statuses() {
    assert_eq!(account_error_to_status(&AccountError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(account_error_to_status(&AccountError::WeakPassword("x")), StatusCode::BAD_REQUEST);
    assert_eq!(account_error_to_status(&AccountError::PasswordRequired), StatusCode::BAD_REQUEST);
    assert_eq!(account_error_to_status(&AccountError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(account_error_to_status(&AccountError::SelfModification), StatusCode::CONFLICT);
    assert_eq!(account_error_to_status(&AccountError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(account_error_to_status(&AccountError::WrongPassword), StatusCode::FORBIDDEN);
    assert_eq!(account_error_to_status(&AccountError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(
        account_error_to_status(&AccountError::Hash("bad params".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn reset_errors_map_to_statuses() {
    assert_eq!(reset_error_to_status(&ResetError::InvalidToken), StatusCode::BAD_REQUEST);
    assert_eq!(
        reset_error_to_status(&ResetError::Account(AccountError::WeakPassword("x"))),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        reset_error_to_status(&ResetError::EmailDelivery("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn login_throttle_key_normalizes() {
    assert_eq!(login_throttle_key("  Foo@Example.COM "), "foo@example.com");
    assert_eq!(login_throttle_key(" Not An Email "), "not an email");
}

// =============================================================================
// Handlers (no database)
// =============================================================================

#[tokio::test]
async fn register_rejects_weak_password_before_db() {
    let state = test_helpers::test_app_state();
    let body = RegisterBody { email: "new@universe.tn".into(), name: "New".into(), password: "short".into() };
    let response = register(State(state), CookieJar::new(), Json(body)).await.unwrap_err();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Password must be at least 8 characters.");
}

#[tokio::test]
async fn register_rejects_malformed_email() {
    let state = test_helpers::test_app_state();
    let body = RegisterBody { email: "nope".into(), name: "New".into(), password: "long enough".into() };
    let response = register(State(state), CookieJar::new(), Json(body)).await.unwrap_err();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_is_throttled_after_limit() {
    let mut config = crate::config::Config::for_tests();
    config.login_rate_limit = 0;
    let state = test_helpers::test_app_state_with_config(config);
    let body = LoginBody { email: "a@universe.tn".into(), password: "whatever1".into() };
    let response = login(State(state), CookieJar::new(), Json(body)).await.unwrap_err();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn login_with_empty_password_is_invalid_credentials() {
    let state = test_helpers::test_app_state();
    let body = LoginBody { email: "a@universe.tn".into(), password: String::new() };
    let response = login(State(state), CookieJar::new(), Json(body)).await.unwrap_err();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "invalid email or password");
}

#[tokio::test]
async fn logout_without_cookie_still_clears() {
    let state = test_helpers::test_app_state();
    let response = logout(State(state), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(set_cookie.starts_with("session_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn reset_confirm_with_weak_password_is_bad_request() {
    let state = test_helpers::test_app_state();
    let body = ResetConfirmBody { token: "abc".into(), password: "short".into() };
    let response = confirm_password_reset(State(state), Json(body)).await.unwrap_err();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reset_request_for_malformed_email_still_succeeds() {
    let state = test_helpers::test_app_state();
    let Json(value) = request_password_reset(State(state), Json(ResetRequestBody { email: "nope".into() })).await;
    assert_eq!(value, serde_json::json!({ "ok": true }));
}
