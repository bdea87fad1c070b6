use super::*;

#[test]
fn validate_register_normalizes_input() {
    let input = validate_register("  Amira  ", " Amira@Example.COM ", "longenough", "longenough").unwrap();
    assert_eq!(
        input,
        RegisterInput {
            email: "amira@example.com".to_owned(),
            name: "Amira".to_owned(),
            password: "longenough".to_owned(),
        }
    );
}

#[test]
fn validate_register_rejects_in_field_order() {
    assert_eq!(validate_register(" ", "bad", "x", "y"), Err("Enter your name."));
    assert_eq!(validate_register("A", "bad", "x", "y"), Err("Enter a valid email address."));
    assert_eq!(validate_register("A", "a@b.c", "short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_register("A", "a@b.c", "longenough", "different"), Err("Passwords do not match."));
}
