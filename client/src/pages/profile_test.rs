use super::*;

#[test]
fn optional_field_blanks_become_none() {
    assert_eq!(optional_field("  "), None);
    assert_eq!(optional_field(" ENIT "), Some("ENIT".to_owned()));
}

#[test]
fn build_profile_form_requires_name() {
    assert_eq!(build_profile_form(" ", "", "", "", ""), Err("Name cannot be empty."));
    let form = build_profile_form(" Amira ", "ENIT", " ", "Hi", "").unwrap();
    assert_eq!(form.name, "Amira");
    assert_eq!(form.university.as_deref(), Some("ENIT"));
    assert_eq!(form.specialty, None);
    assert_eq!(form.bio.as_deref(), Some("Hi"));
    assert_eq!(form.phone, None);
}

#[test]
fn password_change_rules() {
    assert_eq!(validate_password_change("", "longenough", "longenough"), Err("Enter your current password."));
    assert_eq!(validate_password_change("old", "short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_password_change("old", "longenough", "other"), Err("Passwords do not match."));
    assert_eq!(
        validate_password_change("longenough", "longenough", "longenough"),
        Err("The new password must differ from the current one.")
    );
    assert_eq!(validate_password_change("old", "longenough", "longenough"), Ok(()));
}

#[test]
fn delete_requires_password() {
    assert_eq!(validate_delete(""), Err("Enter your password to confirm."));
    assert_eq!(validate_delete("pw"), Ok(()));
}
