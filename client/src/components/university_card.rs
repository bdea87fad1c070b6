//! Directory card for one engineering school.

use leptos::prelude::*;
use models::University;

/// How many specialty chips to show before collapsing into "+N".
const MAX_CHIPS: usize = 4;

#[component]
pub fn UniversityCard(university: &'static University) -> impl IntoView {
    let href = format!("/cycle-ingenieur/{}", university.id);
    let hidden = university.specialties.len().saturating_sub(MAX_CHIPS);
    let status = university.contest_status;

    view! {
        <a class="university-card" href=href>
            <div class="university-card__header">
                <h3 class="university-card__name">{university.name.as_str()}</h3>
                {university.ranking.map(|rank| view! { <span class="university-card__rank">{format!("#{rank}")}</span> })}
            </div>
            <p class="university-card__full-name">{university.full_name.as_str()}</p>
            <p class="university-card__meta">
                <span class="university-card__location">{university.location.as_str()}</span>
                " · "
                <span>{university.kind.label()}</span>
            </p>
            <span class=format!("badge badge--contest-{}", status.css_modifier())>{status.label()}</span>
            <ul class="chip-list">
                {university
                    .specialties
                    .iter()
                    .take(MAX_CHIPS)
                    .map(|s| view! { <li class="chip">{s.as_str()}</li> })
                    .collect::<Vec<_>>()}
                {(hidden > 0).then(|| view! { <li class="chip chip--more">{format!("+{hidden}")}</li> })}
            </ul>
        </a>
    }
}
