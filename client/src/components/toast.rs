//! Toast stack and the handle pages use to raise notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Handle to the app-wide toast stack. Capture it in the component body so
/// async tasks can raise toasts after the reactive owner is gone.
#[derive(Clone, Copy)]
pub struct Toaster(Option<RwSignal<ToastState>>);

/// A no-op handle when rendered outside `App`.
pub fn use_toaster() -> Toaster {
    Toaster(use_context::<RwSignal<ToastState>>())
}

impl Toaster {
    pub fn push(self, kind: ToastKind, message: impl Into<String>) {
        let Some(toasts) = self.0 else {
            return;
        };
        let message = message.into();
        let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
            toasts.update(|t| t.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.get().items key=|t| t.id let:toast>
                <div class=format!("toast toast--{}", toast.kind.css_modifier())>
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
