//! Marketing landing page.

use leptos::prelude::*;
use models::search::all_specialties;

use crate::state::catalog;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (schools, specialties) = catalog::shared()
        .map(|c| (c.len(), all_specialties(c.universities()).len()))
        .unwrap_or_default();

    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>"Your next step, mapped out."</h1>
                <p class="landing__lead">
                    "Browse end-of-studies internships shared on LinkedIn and compare engineering schools "
                    "with last year's admission cutoffs."
                </p>
                <div class="landing__actions">
                    <a class="btn btn--primary" href="/internships">"Browse internships"</a>
                    <a class="btn" href="/cycle-ingenieur">"Compare schools"</a>
                </div>
            </section>
            <section class="landing__stats">
                <div class="stat">
                    <span class="stat__value">{schools}</span>
                    <span class="stat__label">"engineering schools"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{specialties}</span>
                    <span class="stat__label">"specialties"</span>
                </div>
            </section>
            <section class="landing__features">
                <article class="feature">
                    <h2>"Internships (PFE)"</h2>
                    <p>"Fresh offers collected from LinkedIn, moderated and grouped by category."</p>
                    <a href="/internships">"See offers →"</a>
                </article>
                <article class="feature">
                    <h2>"Cycle ingénieur"</h2>
                    <p>"Search schools by city, specialty, or your licence and estimate your admission chances."</p>
                    <a href="/cycle-ingenieur">"Open the directory →"</a>
                </article>
                <article class="feature">
                    <h2>"Your profile"</h2>
                    <p>"Keep your university, specialty, and photo up to date."</p>
                    <a href="/register">"Create an account →"</a>
                </article>
            </section>
        </div>
    }
}
