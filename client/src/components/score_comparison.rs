//! Score entry panel comparing a candidate's score with last year's cutoffs.

use leptos::prelude::*;
use models::University;
use models::admission::{compare_all, parse_score};

#[component]
pub fn ScoreComparison(university: &'static University) -> impl IntoView {
    let raw = RwSignal::new(String::new());
    let score = Memo::new(move |_| parse_score(&raw.get()));
    let invalid = move || {
        let text = raw.get();
        !text.trim().is_empty() && score.get().is_none()
    };
    let scores = &university.last_year_scores;

    view! {
        <section class="score-comparison">
            <h2>"Check your chances"</h2>
            <p class="score-comparison__hint">
                {format!("Compare your score with the {} cutoffs.", scores.year)}
            </p>
            <div class="score-comparison__summary">
                {scores.min().map(|v| view! { <span>{format!("Lowest: {v:.2}")}</span> })}
                {scores.average().map(|v| view! { <span>{format!("Average: {v:.2}")}</span> })}
                {scores.max().map(|v| view! { <span>{format!("Highest: {v:.2}")}</span> })}
            </div>
            <input
                class="input score-comparison__input"
                type="text"
                inputmode="decimal"
                placeholder="Your score, e.g. 142.5"
                prop:value=move || raw.get()
                on:input=move |ev| raw.set(event_target_value(&ev))
            />
            <Show when=invalid>
                <p class="form-error">"Enter a valid, non-negative score."</p>
            </Show>
            {move || {
                score
                    .get()
                    .map(|candidate| {
                        compare_all(university, candidate)
                            .into_iter()
                            .map(|row| {
                                let tier = row.chance.tier;
                                view! {
                                    <div class="chance-row">
                                        <div class="chance-row__header">
                                            <span class="chance-row__name">{row.specialty.name.as_str()}</span>
                                            <span class=format!("badge badge--chance-{}", tier.css_modifier())>
                                                {row.chance.label}
                                            </span>
                                        </div>
                                        <div class="chance-row__bar">
                                            <div
                                                class=format!("chance-row__fill chance-row__fill--{}", tier.css_modifier())
                                                style=format!("width: {}%;", row.chance.percentage)
                                            ></div>
                                        </div>
                                        <p class="chance-row__detail">
                                            {format!(
                                                "Cutoff {:.2} · your margin {:+.2}",
                                                row.specialty.last_acceptable_score,
                                                row.chance.score_diff,
                                            )}
                                        </p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
            }}
        </section>
    }
}
