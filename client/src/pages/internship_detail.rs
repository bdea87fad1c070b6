//! Full view of one internship post.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::post::LinkedInPost;

#[component]
pub fn InternshipDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let post = LocalResource::new(move || {
        let id = id.get();
        async move { crate::net::api::fetch_internship(&id).await }
    });

    view! {
        <div class="internship-detail">
            <a class="back-link" href="/internships">"← All internships"</a>
            <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => render_post(post).into_any(),
                            Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_post(post: LinkedInPost) -> impl IntoView {
    let title = post.display_title();
    let reactions = post.stats.total_reactions();
    let paragraphs: Vec<String> =
        post.text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()).map(str::to_owned).collect();

    view! {
        <article class="post">
            <header class="post__header">
                {post.category.clone().map(|c| view! { <span class="badge badge--category">{c}</span> })}
                <h1>{title}</h1>
                <div class="post__author">
                    {post.author.avatar_url.clone().map(|src| view! { <img class="avatar avatar--md" src=src alt=""/> })}
                    <div>
                        {match post.author.profile_url.clone() {
                            Some(href) => view! { <a href=href target="_blank" rel="noopener">{post.author.name.clone()}</a> }.into_any(),
                            None => view! { <span>{post.author.name.clone()}</span> }.into_any(),
                        }}
                        {post.author.headline.clone().map(|h| view! { <p class="post__headline">{h}</p> })}
                    </div>
                </div>
                <p class="post__date">{post.posted_at.date.clone()}</p>
            </header>
            <div class="post__body">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
            </div>
            {post.media.clone().filter(|m| m.kind == "image").map(|m| view! { <img class="post__media" src=m.url alt=""/> })}
            {post.document.clone().map(|d| {
                let pages = d.page_count.map(|n| format!(" ({n} pages)")).unwrap_or_default();
                view! {
                    <a class="post__document" href=d.url target="_blank" rel="noopener">
                        {format!("📄 {}{pages}", d.title)}
                    </a>
                }
            })}
            <footer class="post__footer">
                <span>{format!("{reactions} reactions")}</span>
                <span>{format!("{} comments", post.stats.comments)}</span>
                <span>{format!("{} reposts", post.stats.reposts)}</span>
                {post.url.clone().map(|href| view! {
                    <a class="btn btn--primary" href=href target="_blank" rel="noopener">"View on LinkedIn"</a>
                })}
            </footer>
        </article>
    }
}
