//! Root application component with routing and shared state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::route_guard::{AdminRoute, ProtectedRoute};
use crate::components::toast::ToastHost;
use crate::pages::{
    admin_posts::AdminPostsPage, admin_scraper::AdminScraperPage, admin_users::AdminUsersPage,
    cycle_ingenieur::CycleIngenieurPage, forgot_password::ForgotPasswordPage,
    internship_detail::InternshipDetailPage, internships::InternshipsPage, landing::LandingPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, reset_password::ResetPasswordPage,
    university_detail::UniversityDetailPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth signal and hands it to every guard and page that needs the
/// signed-in user. Toasts are provided through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    // Bumped after each avatar upload so `<img>` tags refetch.
    let avatar_version = RwSignal::new(0_u32);
    provide_context(RwSignal::new(ToastState::default()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = crate::net::api::fetch_current_user()
            .await
            .map_or_else(AuthState::signed_out, AuthState::signed_in);
        auth.set(state);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/universe.css"/>
        <Title text="Universe"/>

        <Router>
            <Nav auth=auth avatar_version=avatar_version/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage auth=auth/> }/>
                    <Route path=StaticSegment("register") view=move || view! { <RegisterPage auth=auth/> }/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("internships") view=InternshipsPage/>
                    <Route path=(StaticSegment("internships"), ParamSegment("id")) view=InternshipDetailPage/>
                    <Route path=StaticSegment("cycle-ingenieur") view=CycleIngenieurPage/>
                    <Route path=(StaticSegment("cycle-ingenieur"), ParamSegment("id")) view=UniversityDetailPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=move || {
                            view! {
                                <ProtectedRoute auth=auth>
                                    <ProfilePage auth=auth avatar_version=avatar_version/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=move || view! { <AdminRoute auth=auth><AdminUsersPage auth=auth/></AdminRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("posts"))
                        view=move || view! { <AdminRoute auth=auth><AdminPostsPage/></AdminRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("scraper"))
                        view=move || view! { <AdminRoute auth=auth><AdminScraperPage/></AdminRoute> }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
