//! Account creation page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use models::user::{normalize_email, validate_new_password};

use crate::components::toast::use_toaster;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::util::auth::{already_signed_in_target, install_guard_redirect, GuardDecision};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Validate the form and return the normalized values to submit.
pub(crate) fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = normalize_email(email).ok_or("Enter a valid email address.")?;
    validate_new_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput { email, name: name.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_guard_redirect(
        auth,
        |state| already_signed_in_target(state).map_or(GuardDecision::Allow, GuardDecision::Redirect),
        use_navigate(),
    );

    let toaster = use_toaster();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&input.email, &input.name, &input.password).await {
                Ok(user) => {
                    toaster.push(ToastKind::Success, "Welcome to Universe!");
                    auth.set(AuthState::signed_in(user));
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, toaster);
    };

    let text_input = move |label: &'static str, kind: &'static str, autocomplete: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    class="input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {text_input("Full name", "text", "name", name)}
                    {text_input("Email", "email", "email", email)}
                    {text_input("Password", "password", "new-password", password)}
                    {text_input("Confirm password", "password", "new-password", confirm)}
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <span>"Already registered? " <a href="/login">"Log in"</a></span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;
