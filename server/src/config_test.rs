use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn missing_database_url_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn blank_database_url_counts_as_missing() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let cfg = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.db_max_connections, 5);
    assert!(!cfg.cookie_secure);
    assert_eq!(cfg.app_base_url, "http://localhost:3000");
    assert!(cfg.resend.is_none());
    assert!(cfg.scraper_feed_url.is_none());
    assert_eq!(cfg.scraper_timeout, Duration::from_secs(30));
    assert_eq!(cfg.login_rate_limit, 10);
    assert_eq!(cfg.login_rate_window, Duration::from_secs(300));
    assert!(cfg.bootstrap_admin_email.is_none());
}

#[test]
fn malformed_port_is_rejected() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });
}

#[test]
fn malformed_optional_numbers_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("DB_MAX_CONNECTIONS", "lots"),
        ("LOGIN_RATE_LIMIT", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.db_max_connections, 5);
    assert_eq!(cfg.login_rate_limit, 10);
}

#[test]
fn cookie_secure_inferred_from_https_base_url() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("APP_BASE_URL", "https://universe.example.com/"),
    ]))
    .unwrap();
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.app_base_url, "https://universe.example.com");
}

#[test]
fn explicit_cookie_secure_overrides_inference() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("APP_BASE_URL", "https://universe.example.com"),
        ("COOKIE_SECURE", "false"),
    ]))
    .unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn resend_requires_both_key_and_sender() {
    let only_key =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("RESEND_API_KEY", "re_123")])).unwrap();
    assert!(only_key.resend.is_none());

    let both = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "Universe <noreply@universe.tn>"),
    ]))
    .unwrap();
    assert_eq!(
        both.resend,
        Some(ResendConfig { api_key: "re_123".to_owned(), from: "Universe <noreply@universe.tn>".to_owned() })
    );
}

#[test]
fn bootstrap_admin_email_is_normalized() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("BOOTSTRAP_ADMIN_EMAIL", "  Admin@Universe.TN "),
    ]))
    .unwrap();
    assert_eq!(cfg.bootstrap_admin_email.as_deref(), Some("admin@universe.tn"));
}
