//! Route wrappers that gate pages on the auth signal.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use models::user::Role;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, admin_decision, install_guard_redirect, protected_decision};

/// Renders `children` for signed-in users; redirects to `/login` otherwise.
#[component]
pub fn ProtectedRoute(auth: RwSignal<AuthState>, children: ChildrenFn) -> impl IntoView {
    install_guard_redirect(auth, protected_decision, use_navigate());
    let allowed = move || auth.with(|state| protected_decision(state) == GuardDecision::Allow);

    view! {
        <Show when=allowed fallback=|| view! { <p class="route-guard__loading">"Loading..."</p> }>
            {children()}
        </Show>
    }
}

/// Renders `children` when the user's role is in `allowed_roles`; signed-out
/// visitors go to `/login` and everyone else to `/`.
#[component]
pub fn AdminRoute(
    auth: RwSignal<AuthState>,
    #[prop(default = vec![Role::Admin])] allowed_roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let roles = StoredValue::new(allowed_roles);
    install_guard_redirect(auth, move |state| roles.with_value(|r| admin_decision(state, r)), use_navigate());
    let allowed =
        move || auth.with(|state| roles.with_value(|r| admin_decision(state, r)) == GuardDecision::Allow);

    view! {
        <Show when=allowed fallback=|| view! { <p class="route-guard__loading">"Loading..."</p> }>
            {children()}
        </Show>
    }
}
