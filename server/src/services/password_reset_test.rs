use super::*;

#[test]
fn hash_reset_token_is_stable_hex() {
    let a = hash_reset_token("abc123");
    assert_eq!(a, hash_reset_token("abc123"));
    assert_ne!(a, hash_reset_token("abc124"));
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn hash_reset_token_ignores_surrounding_whitespace() {
    assert_eq!(hash_reset_token(" abc123\n"), hash_reset_token("abc123"));
}

#[test]
fn reset_link_joins_base_and_token() {
    assert_eq!(
        reset_link("https://universe.tn/", "deadbeef"),
        "https://universe.tn/reset-password?token=deadbeef"
    );
    assert_eq!(reset_link("http://localhost:3000", "t"), "http://localhost:3000/reset-password?token=t");
}

#[test]
fn render_template_injects_email_and_link() {
    let html = render_reset_template("user@universe.tn", "https://universe.tn/reset-password?token=abc");
    assert!(html.contains("user@universe.tn"));
    assert!(html.contains("https://universe.tn/reset-password?token=abc"));
    assert!(!html.contains("{{EMAIL}}"));
    assert!(!html.contains("{{LINK}}"));
}

#[tokio::test]
async fn deliver_without_resend_only_logs() {
    let config = Config::for_tests();
    assert!(deliver_reset_link(&config, "user@universe.tn", "abc").await.is_ok());
}

#[tokio::test]
async fn confirm_rejects_weak_password_before_touching_db() {
    let state = crate::state::test_helpers::test_app_state();
    let err = confirm_reset(&state.pool, "whatever", "short").await.unwrap_err();
    assert!(matches!(err, ResetError::Account(AccountError::WeakPassword(_))));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn reset_token_is_single_use_and_revokes_sessions() {
    use crate::services::accounts::tests_support::{integration_pool, seed_user};

    let pool = integration_pool().await;
    let user_id = seed_user(&pool, "reset@universe.tn").await;
    let session_token = session::create_session(&pool, user_id).await.unwrap();

    let (_, token) = request_reset(&pool, "Reset@Universe.tn").await.unwrap().expect("account exists");
    assert_eq!(confirm_reset(&pool, &token, "brand new pass").await.unwrap(), user_id);
    assert!(matches!(confirm_reset(&pool, &token, "another pass").await, Err(ResetError::InvalidToken)));
    assert!(session::validate_session(&pool, &session_token).await.unwrap().is_none());
    assert_eq!(accounts::authenticate(&pool, "reset@universe.tn", "brand new pass").await.unwrap(), user_id);

    assert!(request_reset(&pool, "ghost@universe.tn").await.unwrap().is_none());
}
