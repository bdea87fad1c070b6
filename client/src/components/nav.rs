//! Top navigation bar with section links, admin menu, and account controls.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Nav(auth: RwSignal<AuthState>, avatar_version: RwSignal<u32>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState::signed_out());
            if let Some(window) = web_sys::window() {
                if window.location().set_href("/").is_err() {
                    log::warn!("redirect after logout failed");
                }
            }
        });
    };

    let close_menu = move |_| menu_open.set(false);

    view! {
        <header class="site-nav">
            <a class="site-nav__brand" href="/">"Universe"</a>
            <button
                class="site-nav__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                <a href="/internships" on:click=close_menu>"Internships"</a>
                <a href="/cycle-ingenieur" on:click=close_menu>"Cycle ingénieur"</a>
                <Show when=move || auth.with(AuthState::is_admin)>
                    <span class="site-nav__group">"Admin"</span>
                    <a href="/admin/users" on:click=close_menu>"Users"</a>
                    <a href="/admin/posts" on:click=close_menu>"Posts"</a>
                    <a href="/admin/scraper" on:click=close_menu>"Scraper"</a>
                </Show>
            </nav>
            <div class="site-nav__account">
                {move || {
                    let state = auth.get();
                    if state.loading {
                        return ().into_any();
                    }
                    match state.user {
                        Some(user) => {
                            let avatar = user.avatar_url(avatar_version.get());
                            let initials = user.initials();
                            view! {
                                <a class="site-nav__user" href="/profile" title=user.name.clone()>
                                    {match avatar {
                                        Some(src) => view! { <img class="avatar avatar--sm" src=src alt=""/> }.into_any(),
                                        None => view! { <span class="avatar avatar--sm avatar--initials">{initials}</span> }.into_any(),
                                    }}
                                    <span class="site-nav__user-name">{user.name.clone()}</span>
                                </a>
                                <button class="btn btn--ghost" on:click=on_logout>"Log out"</button>
                            }
                                .into_any()
                        }
                        None => view! {
                            <a class="btn btn--ghost" href="/login">"Log in"</a>
                            <a class="btn btn--primary" href="/register">"Sign up"</a>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </header>
    }
}
