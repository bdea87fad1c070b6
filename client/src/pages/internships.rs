//! Internship feed with search, category filter, and pagination.

use leptos::prelude::*;

use crate::components::internship_card::InternshipCard;
use crate::components::option_list::option_rows;
use crate::components::pagination::Pagination;

#[component]
pub fn InternshipsPage() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let draft = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let posts = LocalResource::new(move || {
        let (page, q, category) = (page.get(), query.get(), category.get());
        async move { crate::net::api::fetch_internships(page, &q, &category).await }
    });
    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    let total_pages = Signal::derive(move || {
        posts.get().and_then(Result::ok).map_or(0, |p| p.total_pages)
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(draft.get().trim().to_owned());
        page.set(1);
    };

    view! {
        <div class="internships-page">
            <header class="page-header">
                <h1>"Internships"</h1>
                <p>"End-of-studies (PFE) offers collected from LinkedIn."</p>
            </header>
            <form class="filter-bar" on:submit=on_search>
                <input
                    class="input filter-bar__search"
                    type="search"
                    placeholder="Search by keyword, company, or city"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <select
                    class="select"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        category.set(event_target_value(&ev));
                        page.set(1);
                    }
                >
                    <option value="">"All categories"</option>
                    {move || option_rows(categories.get().unwrap_or_default())}
                </select>
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>

            <Suspense fallback=move || view! { <p class="loading">"Loading internships..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                            Ok(list) if list.items.is_empty() => {
                                view! { <p class="empty-state">"No internships match your search."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <p class="result-count">{format!("{} offers", list.total)}</p>
                                <div class="card-grid">
                                    {list
                                        .items
                                        .into_iter()
                                        .map(|post| view! { <InternshipCard post=post/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <Pagination current=page total=total_pages on_change=Callback::new(move |p| page.set(p))/>
        </div>
    }
}
