//! Summary card for one internship in the feed.

use leptos::prelude::*;
use models::post::LinkedInPost;

const EXCERPT_CHARS: usize = 220;

#[component]
pub fn InternshipCard(post: LinkedInPost) -> impl IntoView {
    let href = format!("/internships/{}", post.id);
    let title = post.display_title();
    let excerpt = post.excerpt(EXCERPT_CHARS);
    let reactions = post.stats.total_reactions();
    let comments = post.stats.comments;
    let posted = if post.posted_at.relative.is_empty() { post.posted_at.date.clone() } else { post.posted_at.relative.clone() };

    view! {
        <a class="internship-card" href=href>
            <div class="internship-card__header">
                {post.category.clone().map(|c| view! { <span class="badge badge--category">{c}</span> })}
                <span class="internship-card__date">{posted}</span>
            </div>
            <h3 class="internship-card__title">{title}</h3>
            <p class="internship-card__author">
                {post.author.name.clone()}
                {post.author.headline.clone().map(|h| view! { <span class="internship-card__headline">" · " {h}</span> })}
            </p>
            <p class="internship-card__excerpt">{excerpt}</p>
            <div class="internship-card__stats">
                <span>{format!("{reactions} reactions")}</span>
                <span>{format!("{comments} comments")}</span>
            </div>
        </a>
    }
}
