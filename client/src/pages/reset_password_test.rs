use super::*;

#[test]
fn validate_reset_requires_token() {
    let expected = Err("This reset link is invalid. Request a new one.");
    assert_eq!(validate_reset(None, "longenough", "longenough"), expected);
    assert_eq!(validate_reset(Some("  "), "longenough", "longenough"), expected);
}

#[test]
fn validate_reset_checks_password_rules_and_match() {
    assert_eq!(validate_reset(Some("t"), "short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_reset(Some("t"), "longenough", "longenougH"), Err("Passwords do not match."));
    assert_eq!(validate_reset(Some("t"), "longenough", "longenough"), Ok(()));
}
