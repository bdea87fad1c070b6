//! Route-guard decisions and the redirect effect that applies them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `AdminRoute` share one decision function each so the
//! redirect rules can be tested without mounting components.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use models::user::Role;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session probe still in flight.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Signed-in users pass; everyone else goes to `/login` once auth has loaded.
#[must_use]
pub fn protected_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.user.is_some() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Like [`protected_decision`], but a signed-in user whose role is not in
/// `allowed` is sent to `/`.
#[must_use]
pub fn admin_decision(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    match protected_decision(state) {
        GuardDecision::Allow => match state.role() {
            Some(role) if role.is_allowed(allowed) => GuardDecision::Allow,
            _ => GuardDecision::Redirect(HOME_PATH),
        },
        other => other,
    }
}

/// Where a visitor on `/login` or `/register` goes once signed in.
#[must_use]
pub fn already_signed_in_target(state: &AuthState) -> Option<&'static str> {
    (!state.loading && state.user.is_some()).then_some(HOME_PATH)
}

/// Navigate whenever `decide` returns a redirect for the current auth state.
pub fn install_guard_redirect<D, F>(auth: RwSignal<AuthState>, decide: D, navigate: F)
where
    D: Fn(&AuthState) -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = auth.with(|state| decide(state)) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
