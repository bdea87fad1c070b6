use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "amira@example.com".to_owned(),
        name: "Amira".to_owned(),
        role,
        university: None,
        specialty: None,
        bio: None,
        phone: None,
        has_avatar: false,
        member_since: Some("2025-09-01".to_owned()),
    }
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_and_out() {
    let state = AuthState::signed_in(user(Role::User));
    assert!(!state.loading);
    assert_eq!(state.user_id(), Some("u1"));
    assert_eq!(AuthState::signed_out(), AuthState { user: None, loading: false });
}

// =============================================================
// Role queries
// =============================================================

#[test]
fn is_admin_reflects_role() {
    assert!(AuthState::signed_in(user(Role::Admin)).is_admin());
    assert!(!AuthState::signed_in(user(Role::User)).is_admin());
    assert!(!AuthState::signed_out().is_admin());
}

#[test]
fn role_is_none_when_signed_out() {
    assert_eq!(AuthState::pending().role(), None);
    assert_eq!(AuthState::signed_in(user(Role::Admin)).role(), Some(Role::Admin));
}
