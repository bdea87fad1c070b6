//! Admin review queue for scraped posts. Flagged posts lack a category or
//! title; filling both publishes them.

use leptos::prelude::*;
use models::post::{LinkedInPost, PostStatus};

use crate::components::pagination::Pagination;
use crate::components::toast::use_toaster;
use crate::net::types::PostPatch;
use crate::pages::admin_users::confirm_action;
use crate::state::toast::ToastKind;

const STATUS_TABS: [(Option<PostStatus>, &str); 3] =
    [(None, "All"), (Some(PostStatus::Published), "Published"), (Some(PostStatus::Flagged), "Flagged")];

/// Diff the edited fields against the stored post. `None` means nothing to save.
pub(crate) fn patch_from_edits(post: &LinkedInPost, category: &str, title: &str) -> Option<PostPatch> {
    let changed = |stored: Option<&String>, edited: &str| {
        let edited = edited.trim();
        (stored.map_or("", |s| s.trim()) != edited).then(|| edited.to_owned())
    };
    let patch = PostPatch { category: changed(post.category.as_ref(), category), title: changed(post.title.as_ref(), title) };
    (patch != PostPatch::default()).then_some(patch)
}

#[component]
pub fn AdminPostsPage() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let status = RwSignal::new(None::<PostStatus>);
    let reload = RwSignal::new(0_u32);

    let posts = LocalResource::new(move || {
        let (page, status) = (page.get(), status.get());
        reload.track();
        async move { crate::net::api::fetch_admin_posts(page, status).await }
    });
    let total_pages = Signal::derive(move || posts.get().and_then(Result::ok).map_or(0, |p| p.total_pages));
    let on_changed = Callback::new(move |()| reload.update(|n| *n += 1));

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Posts"</h1>
                <p>"Flagged posts are hidden from the internship feed until they have a category and a title."</p>
            </header>
            <nav class="tabs">
                {STATUS_TABS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || status.get() == value
                                on:click=move |_| {
                                    status.set(value);
                                    page.set(1);
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                            Ok(list) if list.items.is_empty() => {
                                view! { <p class="empty-state">"No posts in this view."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Post"</th>
                                            <th>"Category"</th>
                                            <th>"Title"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .items
                                            .into_iter()
                                            .map(|post| view! { <PostRow post=post on_changed=on_changed/> })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
            <Pagination current=page total=total_pages on_change=Callback::new(move |p| page.set(p))/>
        </div>
    }
}

#[component]
fn PostRow(post: LinkedInPost, on_changed: Callback<()>) -> impl IntoView {
    let category = RwSignal::new(post.category.clone().unwrap_or_default());
    let title = RwSignal::new(post.title.clone().unwrap_or_default());
    let busy = RwSignal::new(false);
    let toaster = use_toaster();
    let status = post.status();
    let excerpt = post.excerpt(120);
    let author = post.author.name.clone();
    let post = StoredValue::new(post);

    let on_save = move |_| {
        let Some(patch) = post.with_value(|p| patch_from_edits(p, &category.get(), &title.get())) else {
            toaster.push(ToastKind::Info, "Nothing to save.");
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let id = post.with_value(|p| p.id.clone());
            match crate::net::api::update_post(&id, &patch).await {
                Ok(updated) => {
                    let message = match updated.status() {
                        PostStatus::Published => "Post published.",
                        PostStatus::Flagged => "Post saved. It stays flagged until both fields are set.",
                    };
                    toaster.push(ToastKind::Success, message);
                    on_changed.run(());
                }
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (patch, on_changed);
    };

    let on_delete = move |_| {
        if !confirm_action("Delete this post? It will not come back on the next scrape.") {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let id = post.with_value(|p| p.id.clone());
            match crate::net::api::delete_post(&id).await {
                Ok(()) => {
                    toaster.push(ToastKind::Success, "Post deleted.");
                    on_changed.run(());
                }
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
        });
    };

    view! {
        <tr>
            <td class="table__excerpt">
                <strong>{author}</strong>
                <p>{excerpt}</p>
            </td>
            <td>
                <input class="input" type="text" prop:value=move || category.get() on:input=move |ev| category.set(event_target_value(&ev))/>
            </td>
            <td>
                <input class="input" type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
            </td>
            <td>
                <span class=format!("badge badge--{}", status.as_str())>{status.as_str()}</span>
            </td>
            <td class="table__actions">
                <button class="btn btn--primary btn--sm" disabled=move || busy.get() on:click=on_save>"Save"</button>
                <button class="btn btn--danger btn--sm" disabled=move || busy.get() on:click=on_delete>"Delete"</button>
            </td>
        </tr>
    }
}

#[cfg(test)]
#[path = "admin_posts_test.rs"]
mod admin_posts_test;
