//! Detail page for one school: specialties, cutoffs, contact, and the
//! admission-chance panel.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::University;

use crate::components::score_comparison::ScoreComparison;
use crate::state::catalog;

#[component]
pub fn UniversityDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    view! {
        <div class="university-detail">
            <a class="back-link" href="/cycle-ingenieur">"← All schools"</a>
            {move || {
                let id = id.get();
                match catalog::shared().map(|c| c.get(&id)) {
                    Ok(Some(university)) => render_university(university).into_any(),
                    Ok(None) => view! { <p class="empty-state">"School not found."</p> }.into_any(),
                    Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn render_university(university: &'static University) -> impl IntoView {
    let status = university.contest_status;
    let contact = &university.contact;
    let scores = &university.last_year_scores;

    view! {
        <header class="university-detail__header">
            <div>
                <h1>{university.name.as_str()}</h1>
                <p class="university-detail__full-name">{university.full_name.as_str()}</p>
                <p class="university-detail__meta">
                    {university.location.as_str()}
                    " · "
                    {university.kind.label()}
                    {university.founded.map(|y| format!(" · Founded {y}"))}
                    {university.student_count.map(|n| format!(" · {n} students"))}
                </p>
            </div>
            <div class="university-detail__badges">
                {university.ranking.map(|r| view! { <span class="badge">{format!("Rank #{r}")}</span> })}
                <span class=format!("badge badge--contest-{}", status.css_modifier())>{status.label()}</span>
            </div>
        </header>

        {(!university.images.is_empty()).then(|| view! {
            <div class="gallery">
                {university.images.iter().map(|src| view! { <img src=src.as_str() alt=university.name.as_str()/> }).collect::<Vec<_>>()}
            </div>
        })}

        {(!university.description.is_empty()).then(|| view! { <p class="university-detail__description">{university.description.as_str()}</p> })}

        <section>
            <h2>{format!("Specialties and {} cutoffs", scores.year)}</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Specialty"</th>
                        <th>"Code"</th>
                        <th>"Accepted licences"</th>
                        <th>"Seats"</th>
                        <th>"Last cutoff"</th>
                    </tr>
                </thead>
                <tbody>
                    {university
                        .detailed_specialties
                        .iter()
                        .map(|s| view! {
                            <tr>
                                <td>{s.name.as_str()}</td>
                                <td>{s.code.as_str()}</td>
                                <td>{s.license.iter().collect::<Vec<_>>().join(", ")}</td>
                                <td>{s.capacity}</td>
                                <td>{format!("{:.2}", s.last_acceptable_score)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3">"Total seats"</td>
                        <td>{university.total_capacity()}</td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>
        </section>

        <ScoreComparison university=university/>

        <section class="university-detail__info">
            {(!university.facilities.is_empty()).then(|| view! {
                <div>
                    <h2>"Facilities"</h2>
                    <ul class="chip-list">
                        {university.facilities.iter().map(|f| view! { <li class="chip">{f.as_str()}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
            <div>
                <h2>"Contact"</h2>
                {(!university.address.is_empty()).then(|| view! { <p>{university.address.as_str()}</p> })}
                {contact.phone.as_deref().map(|p| view! { <p>"Phone: " {p}</p> })}
                {contact.email.as_deref().map(|e| view! { <p>"Email: " <a href=format!("mailto:{e}")>{e}</a></p> })}
                {contact.website.as_deref().map(|w| view! { <p><a href=w target="_blank" rel="noopener">{w}</a></p> })}
            </div>
        </section>
    }
}
