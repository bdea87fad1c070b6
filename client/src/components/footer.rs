//! Site footer with section links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <span class="site-footer__logo">"Universe"</span>
                <p>"Find your engineering school and your end-of-studies internship."</p>
            </div>
            <nav class="site-footer__links">
                <a href="/internships">"Internships"</a>
                <a href="/cycle-ingenieur">"Cycle ingénieur"</a>
                <a href="/profile">"My profile"</a>
            </nav>
            <p class="site-footer__legal">"Admission data is indicative. Check official announcements."</p>
        </footer>
    }
}
