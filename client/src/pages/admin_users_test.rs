use super::*;

#[test]
fn admins_cannot_modify_themselves() {
    assert!(!can_modify(Some("u1"), "u1"));
    assert!(can_modify(Some("u1"), "u2"));
}

#[test]
fn nobody_modifies_without_a_session() {
    assert!(!can_modify(None, "u2"));
}

#[test]
fn confirm_action_defaults_to_true_off_browser() {
    assert!(confirm_action("Delete?"));
}
