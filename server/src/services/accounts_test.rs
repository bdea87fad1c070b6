use super::*;

// =============================================================================
// Password hashing
// =============================================================================

#[test]
fn hash_and_verify_round_trip() {
    let hash = hash_password("correct horse").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password(&hash, "correct horse"));
    assert!(!verify_password(&hash, "wrong horse"));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("same password").unwrap();
    let b = hash_password("same password").unwrap();
    assert_ne!(a, b);
}

#[test]
fn malformed_hash_never_verifies() {
    assert!(!verify_password("", "anything"));
    assert!(!verify_password("not-a-phc-string", "anything"));
}

#[test]
fn dummy_hash_matches_real_parameters_and_rejects_everything() {
    let dummy = PasswordHash::new(dummy_hash()).unwrap();
    let real_hash = hash_password("correct horse").unwrap();
    let real = PasswordHash::new(&real_hash).unwrap();
    assert_eq!(dummy.algorithm, real.algorithm);
    assert_eq!(dummy.params, real.params);
    assert_eq!(dummy_hash(), dummy_hash());
    for guess in ["", "correct horse", "password"] {
        assert!(!verify_password(dummy_hash(), guess));
    }
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn normalize_name_trims_and_requires_content() {
    assert_eq!(normalize_name("  Amira Ben Salah ").unwrap(), "Amira Ben Salah");
    assert!(matches!(normalize_name("   "), Err(AccountError::InvalidName)));
}

#[test]
fn normalize_name_rejects_overlong() {
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert!(matches!(normalize_name(&long), Err(AccountError::FieldTooLong("name"))));
    assert!(normalize_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
}

#[test]
fn normalize_optional_blank_becomes_none() {
    assert_eq!(normalize_optional(None, "bio", 10).unwrap(), None);
    assert_eq!(normalize_optional(Some("   "), "bio", 10).unwrap(), None);
    assert_eq!(normalize_optional(Some(" ENIT "), "university", 10).unwrap(), Some("ENIT".to_owned()));
}

#[test]
fn normalize_optional_counts_characters_not_bytes() {
    // Ten accented characters, twenty bytes.
    let value = "é".repeat(10);
    assert!(normalize_optional(Some(&value), "bio", 10).unwrap().is_some());
    assert!(matches!(
        normalize_optional(Some(&value), "bio", 9),
        Err(AccountError::FieldTooLong("bio"))
    ));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(AccountError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(
        AccountError::WeakPassword("Password must be at least 8 characters.").to_string(),
        "Password must be at least 8 characters."
    );
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::tests_support::{integration_pool, seed_user};
    use super::*;

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn register_rejects_duplicate_email_case_insensitively() {
        let pool = integration_pool().await;
        seed_user(&pool, "dup@universe.tn").await;
        let err = register(
            &pool,
            NewAccount { email: "DUP@universe.tn".into(), name: "Dup".into(), password: "long enough".into() },
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AccountError::EmailTaken));
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn bootstrap_email_registers_as_admin() {
        let pool = integration_pool().await;
        sqlx::query("DELETE FROM users WHERE email = 'boot@universe.tn'")
            .execute(&pool)
            .await
            .unwrap();
        let id = register(
            &pool,
            NewAccount { email: "boot@universe.tn".into(), name: "Boot".into(), password: "long enough".into() },
            Some("boot@universe.tn"),
        )
        .await
        .unwrap();
        assert_eq!(get_user(&pool, id).await.unwrap().role, Role::Admin);
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn authenticate_accepts_only_the_right_password() {
        let pool = integration_pool().await;
        let id = seed_user(&pool, "login@universe.tn").await;
        assert_eq!(authenticate(&pool, " Login@Universe.tn", "correct horse").await.unwrap(), id);
        assert!(matches!(
            authenticate(&pool, "login@universe.tn", "nope nope").await,
            Err(AccountError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&pool, "nobody@universe.tn", "correct horse").await,
            Err(AccountError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn delete_account_requires_password() {
        let pool = integration_pool().await;
        let id = seed_user(&pool, "leaving@universe.tn").await;
        assert!(matches!(delete_account(&pool, id, "").await, Err(AccountError::PasswordRequired)));
        assert!(matches!(delete_account(&pool, id, "wrong one").await, Err(AccountError::WrongPassword)));
        delete_account(&pool, id, "correct horse").await.unwrap();
        assert!(matches!(get_user(&pool, id).await, Err(AccountError::NotFound)));
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL/live Postgres"]
    async fn admin_cannot_demote_or_delete_self() {
        let pool = integration_pool().await;
        let id = seed_user(&pool, "selfadmin@universe.tn").await;
        set_role(&pool, Uuid::new_v4(), id, Role::Admin).await.unwrap();
        assert!(matches!(set_role(&pool, id, id, Role::User).await, Err(AccountError::SelfModification)));
        assert!(matches!(delete_user(&pool, id, id).await, Err(AccountError::SelfModification)));
    }
}
