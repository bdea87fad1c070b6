use super::*;
use crate::net::types::User;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role,
        university: None,
        specialty: None,
        bio: None,
        phone: None,
        has_avatar: false,
        member_since: None,
    }
}

// =============================================================
// ProtectedRoute
// =============================================================

#[test]
fn protected_waits_while_loading() {
    assert_eq!(protected_decision(&AuthState::pending()), GuardDecision::Wait);
}

#[test]
fn protected_redirects_to_login_when_signed_out() {
    assert_eq!(protected_decision(&AuthState::signed_out()), GuardDecision::Redirect("/login"));
}

#[test]
fn protected_allows_any_signed_in_user() {
    assert_eq!(protected_decision(&AuthState::signed_in(user(Role::User))), GuardDecision::Allow);
}

// =============================================================
// AdminRoute
// =============================================================

#[test]
fn admin_allows_listed_role() {
    let state = AuthState::signed_in(user(Role::Admin));
    assert_eq!(admin_decision(&state, &[Role::Admin]), GuardDecision::Allow);
}

#[test]
fn admin_sends_other_roles_home() {
    let state = AuthState::signed_in(user(Role::User));
    assert_eq!(admin_decision(&state, &[Role::Admin]), GuardDecision::Redirect("/"));
    let admin = AuthState::signed_in(user(Role::Admin));
    assert_eq!(admin_decision(&admin, &[]), GuardDecision::Redirect("/"));
}

#[test]
fn admin_defers_to_protected_rules() {
    assert_eq!(admin_decision(&AuthState::pending(), &[Role::Admin]), GuardDecision::Wait);
    assert_eq!(admin_decision(&AuthState::signed_out(), &[Role::Admin]), GuardDecision::Redirect("/login"));
}

#[test]
fn signed_in_visitors_leave_auth_pages() {
    assert_eq!(already_signed_in_target(&AuthState::signed_in(user(Role::User))), Some("/"));
    assert_eq!(already_signed_in_target(&AuthState::pending()), None);
    assert_eq!(already_signed_in_target(&AuthState::signed_out()), None);
}
