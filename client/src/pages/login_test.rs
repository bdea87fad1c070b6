use super::*;

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login("a@b.c", ""), Err("Enter your email and password."));
    assert_eq!(validate_login("   ", "x"), Err("Enter your email and password."));
}

#[test]
fn validate_login_accepts_filled_form() {
    assert_eq!(validate_login("a@b.c", "pw"), Ok(()));
}
