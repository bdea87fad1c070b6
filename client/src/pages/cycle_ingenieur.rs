//! Engineering-school directory: free-text search with specialty and type
//! selectors, plus a lookup of the specialties open to a given licence.

use leptos::prelude::*;
use models::search::{
    ALL_SPECIALTIES, ALL_TYPES, UniversityFilter, all_licenses, all_specialties, filter_universities,
    get_universities_by_license,
};
use models::{Catalog, University, UniversityType};

use crate::components::option_list::option_rows;
use crate::components::university_card::UniversityCard;
use crate::state::catalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Browse,
    ByLicense,
}

/// `(value, label)` pairs for the type selector, sentinel first.
pub(crate) fn type_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL_TYPES, ALL_TYPES))
        .chain(UniversityType::ALL.iter().map(|t| (t.as_str(), t.label())))
        .collect()
}

/// Directory rows for the current selector values, ordered by ranking.
pub(crate) fn directory_results(
    catalog: &'static Catalog,
    query: &str,
    specialty: &str,
    kind: &str,
) -> Vec<&'static University> {
    filter_universities(catalog.universities(), &UniversityFilter::from_selectors(query, specialty, kind))
}

#[component]
pub fn CycleIngenieurPage() -> impl IntoView {
    match catalog::shared() {
        Ok(catalog) => view! { <Directory catalog=catalog/> }.into_any(),
        Err(e) => view! { <p class="form-error">{format!("School data is unavailable: {e}")}</p> }.into_any(),
    }
}

#[component]
fn Directory(catalog: &'static Catalog) -> impl IntoView {
    let mode = RwSignal::new(Mode::Browse);
    let query = RwSignal::new(String::new());
    let specialty = RwSignal::new(ALL_SPECIALTIES.to_owned());
    let kind = RwSignal::new(ALL_TYPES.to_owned());
    let license = RwSignal::new(String::new());

    let specialties = all_specialties(catalog.universities());
    let licenses = all_licenses(catalog.universities());

    let results = Memo::new(move |_| directory_results(catalog, &query.get(), &specialty.get(), &kind.get()));

    let reset = move |_| {
        query.set(String::new());
        specialty.set(ALL_SPECIALTIES.to_owned());
        kind.set(ALL_TYPES.to_owned());
    };

    view! {
        <div class="directory">
            <header class="page-header">
                <h1>"Cycle ingénieur"</h1>
                <p>"Compare engineering schools and last year's admission cutoffs."</p>
            </header>
            <div class="tabs" role="tablist">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || mode.get() == Mode::Browse
                    on:click=move |_| mode.set(Mode::Browse)
                >
                    "Browse schools"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || mode.get() == Mode::ByLicense
                    on:click=move |_| mode.set(Mode::ByLicense)
                >
                    "By licence"
                </button>
            </div>

            <Show
                when=move || mode.get() == Mode::Browse
                fallback=move || view! { <LicenseLookup catalog=catalog licenses=licenses.clone() license=license/> }
            >
                <div class="filter-bar">
                    <input
                        class="input filter-bar__search"
                        type="search"
                        placeholder="Search by name, city, or specialty"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <select
                        class="select"
                        prop:value=move || specialty.get()
                        on:change=move |ev| specialty.set(event_target_value(&ev))
                    >
                        <option value=ALL_SPECIALTIES>{ALL_SPECIALTIES}</option>
                        {option_rows(specialties.clone())}
                    </select>
                    <select class="select" prop:value=move || kind.get() on:change=move |ev| kind.set(event_target_value(&ev))>
                        {type_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click=reset>"Reset"</button>
                </div>
                <p class="result-count">{move || format!("{} schools", results.with(Vec::len))}</p>
                <Show
                    when=move || results.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty-state">"No school matches these filters."</p> }
                >
                    <div class="card-grid">
                        <For each=move || results.get() key=|u| u.id.clone() let:university>
                            <UniversityCard university=university/>
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn LicenseLookup(catalog: &'static Catalog, licenses: Vec<String>, license: RwSignal<String>) -> impl IntoView {
    let matches = Memo::new(move |_| {
        let selected = license.get();
        get_universities_by_license(catalog.universities(), &selected)
            .into_iter()
            .map(|m| (m.university, m.specialties))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="license-lookup">
            <select class="select" prop:value=move || license.get() on:change=move |ev| license.set(event_target_value(&ev))>
                <option value="">"Choose your licence"</option>
                {option_rows(licenses)}
            </select>
            {move || {
                if license.with(|l| l.trim().is_empty()) {
                    return view! { <p class="empty-state">"Pick a licence to see the specialties it opens."</p> }.into_any();
                }
                let rows = matches.get();
                if rows.is_empty() {
                    return view! { <p class="empty-state">"No specialty accepts this licence."</p> }.into_any();
                }
                rows.into_iter()
                    .map(|(university, specialties)| {
                        view! {
                            <section class="license-match">
                                <h3>
                                    <a href=format!("/cycle-ingenieur/{}", university.id)>{university.name.as_str()}</a>
                                    <span class="license-match__city">{university.location.as_str()}</span>
                                </h3>
                                <table class="table">
                                    <thead>
                                        <tr><th>"Specialty"</th><th>"Code"</th><th>"Seats"</th><th>"Last cutoff"</th></tr>
                                    </thead>
                                    <tbody>
                                        {specialties
                                            .into_iter()
                                            .map(|s| view! {
                                                <tr>
                                                    <td>{s.name.as_str()}</td>
                                                    <td>{s.code.as_str()}</td>
                                                    <td>{s.capacity}</td>
                                                    <td>{format!("{:.2}", s.last_acceptable_score)}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
#[path = "cycle_ingenieur_test.rs"]
mod cycle_ingenieur_test;
