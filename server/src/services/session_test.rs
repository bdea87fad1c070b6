use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        email: "amira@universe.tn".into(),
        name: "Amira".into(),
        role: Role::Admin,
        university: Some("ENIT".into()),
        specialty: None,
        bio: None,
        phone: None,
        has_avatar: true,
        member_since: Some("2025-09-01".into()),
    }
}

#[test]
fn session_user_serializes_role_lowercase() {
    let json = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["email"], "amira@universe.tn");
    assert_eq!(json["has_avatar"], true);
    assert!(json["specialty"].is_null());
}

#[test]
fn user_columns_select_every_session_user_field() {
    for column in ["id", "email", "name", "role", "university", "specialty", "bio", "phone", "has_avatar", "member_since"] {
        assert!(USER_COLUMNS.contains(column), "missing column {column}");
    }
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn session_lifecycle_round_trip() {
    let pool = crate::services::accounts::tests_support::integration_pool().await;
    let user_id = crate::services::accounts::tests_support::seed_user(&pool, "session@universe.tn").await;

    let token = create_session(&pool, user_id).await.unwrap();
    let user = validate_session(&pool, &token).await.unwrap().expect("session should validate");
    assert_eq!(user.id, user_id);
    assert_eq!(user.role, Role::User);

    let second = create_session(&pool, user_id).await.unwrap();
    let revoked = revoke_user_sessions(&pool, user_id, Some(&token)).await.unwrap();
    assert_eq!(revoked, 1);
    assert!(validate_session(&pool, &second).await.unwrap().is_none());
    assert!(validate_session(&pool, &token).await.unwrap().is_some());

    delete_session(&pool, &token).await.unwrap();
    assert!(validate_session(&pool, &token).await.unwrap().is_none());
}
