//! Page strip shared by the internship feed and admin tables.

use leptos::prelude::*;

use crate::util::pagination::{PageItem, next_page, page_numbers, prev_page};

/// Hidden when there is at most one page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_change.run(page);
        }
    };

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || prev_page(current.get()).is_none()
                    on:click=move |_| go(prev_page(current.get()))
                >
                    "‹ Prev"
                </button>
                {move || {
                    let active = current.get();
                    page_numbers(active, total.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=n == active
                                    aria-current=if n == active { Some("page") } else { None }
                                    on:click=move |_| go(Some(n))
                                >
                                    {n}
                                </button>
                            }
                                .into_any(),
                            PageItem::Ellipsis => view! { <span class="pagination__ellipsis">"…"</span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__step"
                    disabled=move || next_page(current.get(), total.get()).is_none()
                    on:click=move |_| go(next_page(current.get(), total.get()))
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
