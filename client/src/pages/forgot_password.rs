//! Password reset request page. Always reports success so the form cannot be
//! used to probe which addresses have accounts.

use leptos::prelude::*;
use models::user::normalize_email;

pub(crate) const SENT_MESSAGE: &str =
    "If an account exists for this address, a reset link is on its way. Check your inbox.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(address) = normalize_email(&email.get()) else {
            error.set("Enter a valid email address.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&address).await {
                Ok(()) => sent.set(true),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (address, sent);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <p class="auth-card__subtitle">"We'll email you a link to choose a new password."</p>
                            <form class="auth-form" on:submit=on_submit>
                                <label class="field">
                                    <span>"Email"</span>
                                    <input
                                        class="input"
                                        type="email"
                                        autocomplete="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <Show when=move || !error.get().is_empty()>
                                    <p class="form-error">{move || error.get()}</p>
                                </Show>
                                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                                    "Send reset link"
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="form-success">{SENT_MESSAGE}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
