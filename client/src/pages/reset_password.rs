//! Password reset confirmation page reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use models::user::validate_new_password;

/// Validate the new password pair; the token must be present in the URL.
pub(crate) fn validate_reset(token: Option<&str>, password: &str, confirm: &str) -> Result<(), &'static str> {
    if token.is_none_or(|t| t.trim().is_empty()) {
        return Err("This reset link is invalid. Request a new one.");
    }
    validate_new_password(password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = Memo::new(move |_| query.with(|q| q.get("token")));
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token.get();
        let password_value = password.get();
        if let Err(message) = validate_reset(token_value.as_deref(), &password_value, &confirm.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token_value = token_value.unwrap_or_default();
            match crate::net::api::confirm_password_reset(&token_value, &password_value).await {
                Ok(()) => done.set(true),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token_value, password_value, done);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show
                    when=move || done.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_submit>
                                <label class="field">
                                    <span>"New password"</span>
                                    <input
                                        class="input"
                                        type="password"
                                        autocomplete="new-password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="field">
                                    <span>"Confirm password"</span>
                                    <input
                                        class="input"
                                        type="password"
                                        autocomplete="new-password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                    />
                                </label>
                                <Show when=move || !error.get().is_empty()>
                                    <p class="form-error">{move || error.get()}</p>
                                </Show>
                                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                                    "Update password"
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="form-success">"Your password has been updated. All other sessions were signed out."</p>
                    <a class="btn btn--primary btn--block" href="/login">"Sign in"</a>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;
