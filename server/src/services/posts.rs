//! Internship posts: public listing, admin moderation, and scraper upserts.
//!
//! DESIGN
//! ======
//! Nested post data (author, stats, timestamps, attachments) is stored as
//! JSONB and decoded straight into the shared `models::post` types. The
//! publication rule lives in SQL as [`PUBLISHED_SQL`] so filtering and
//! pagination happen in the database; it mirrors `PostStatus::derive`.

use models::page::{Page, PageRequest};
use models::post::{LinkedInPost, PostAuthor, PostDocument, PostMedia, PostStats, PostStatus, PostedAt};
use serde::Deserialize;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::like_pattern;

/// SQL predicate: both category and title present and not blank.
pub(crate) const PUBLISHED_SQL: &str =
    "(NULLIF(btrim(p.category), '') IS NOT NULL AND NULLIF(btrim(p.title), '') IS NOT NULL)";

const POST_COLUMNS: &str =
    "p.id, p.external_id, p.author, p.body, p.stats, p.posted_at, p.media, p.document, p.category, p.title, p.url";

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("post not found")]
    NotFound,
    #[error("external id is required")]
    MissingExternalId,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// A post as delivered by the scraper feed, before it has a local id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub external_id: String,
    pub author: PostAuthor,
    pub text: String,
    #[serde(default)]
    pub stats: PostStats,
    pub posted_at: PostedAt,
    #[serde(default)]
    pub media: Option<PostMedia>,
    #[serde(default)]
    pub document: Option<PostDocument>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Public listing filters.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Moderation patch. `None` leaves a field unchanged; a blank string clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub category: Option<String>,
    pub title: Option<String>,
}

fn post_from_row(row: &PgRow) -> Result<LinkedInPost, sqlx::Error> {
    let id: Uuid = row.try_get("id")?;
    let author: Json<PostAuthor> = row.try_get("author")?;
    let stats: Json<PostStats> = row.try_get("stats")?;
    let posted_at: Json<PostedAt> = row.try_get("posted_at")?;
    let media: Option<Json<PostMedia>> = row.try_get("media")?;
    let document: Option<Json<PostDocument>> = row.try_get("document")?;
    Ok(LinkedInPost {
        id: id.to_string(),
        external_id: row.try_get("external_id")?,
        author: author.0,
        text: row.try_get("body")?,
        stats: stats.0,
        posted_at: posted_at.0,
        media: media.map(|m| m.0),
        document: document.map(|d| d.0),
        category: row.try_get("category")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
    })
}

fn posts_from_rows(rows: &[PgRow]) -> Result<Vec<LinkedInPost>, sqlx::Error> {
    rows.iter().map(post_from_row).collect()
}

fn to_total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// `WHERE` fragment selecting posts in `status`, or every post for `None`.
pub(crate) fn status_clause(status: Option<PostStatus>) -> String {
    match status {
        None => "TRUE".to_owned(),
        Some(PostStatus::Published) => PUBLISHED_SQL.to_owned(),
        Some(PostStatus::Flagged) => format!("NOT {PUBLISHED_SQL}"),
    }
}

/// Normalize a category filter; blank means no filter.
pub(crate) fn normalize_filter(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

// =============================================================================
// PUBLIC LISTING
// =============================================================================

/// Published posts, newest first.
pub async fn list_published(pool: &PgPool, query: &PostQuery, request: PageRequest) -> Result<Page<LinkedInPost>, PostError> {
    let pattern = query.q.as_deref().and_then(like_pattern);
    let category = normalize_filter(query.category.as_deref());
    let filter = format!(
        "{PUBLISHED_SQL}
         AND ($1::text IS NULL OR p.body ILIKE $1 OR p.title ILIKE $1 OR p.author->>'name' ILIKE $1)
         AND ($2::text IS NULL OR lower(btrim(p.category)) = lower($2))"
    );

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM posts p WHERE {filter}"))
        .bind(pattern.as_deref())
        .bind(category.as_deref())
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query(&format!(
        "SELECT {POST_COLUMNS} FROM posts p WHERE {filter}
         ORDER BY p.posted_ts DESC, p.id
         LIMIT $3 OFFSET $4"
    ))
    .bind(pattern.as_deref())
    .bind(category.as_deref())
    .bind(request.limit())
    .bind(request.offset())
    .fetch_all(pool)
    .await?;

    Ok(Page::new(posts_from_rows(&rows)?, request, to_total(total)))
}

/// A single published post. Flagged posts are reported as not found.
pub async fn get_published(pool: &PgPool, id: Uuid) -> Result<LinkedInPost, PostError> {
    let row = sqlx::query(&format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1 AND {PUBLISHED_SQL}"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let row = row.ok_or(PostError::NotFound)?;
    Ok(post_from_row(&row)?)
}

/// Distinct categories of published posts, sorted.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, PostError> {
    let categories: Vec<String> = sqlx::query_scalar(&format!(
        "SELECT DISTINCT btrim(p.category) AS category FROM posts p WHERE {PUBLISHED_SQL} ORDER BY category"
    ))
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

// =============================================================================
// ADMIN MODERATION
// =============================================================================

/// All posts in `status` (or every post), newest first.
pub async fn list_for_admin(
    pool: &PgPool,
    status: Option<PostStatus>,
    request: PageRequest,
) -> Result<Page<LinkedInPost>, PostError> {
    let clause = status_clause(status);

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM posts p WHERE {clause}"))
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query(&format!(
        "SELECT {POST_COLUMNS} FROM posts p WHERE {clause}
         ORDER BY p.posted_ts DESC, p.id
         LIMIT $1 OFFSET $2"
    ))
    .bind(request.limit())
    .bind(request.offset())
    .fetch_all(pool)
    .await?;

    Ok(Page::new(posts_from_rows(&rows)?, request, to_total(total)))
}

/// Apply a moderation patch and return the updated post.
pub async fn update_post(pool: &PgPool, id: Uuid, patch: &PostPatch) -> Result<LinkedInPost, PostError> {
    let row = sqlx::query(&format!(
        "UPDATE posts p
         SET category = CASE WHEN $2::text IS NULL THEN p.category ELSE NULLIF(btrim($2), '') END,
             title = CASE WHEN $3::text IS NULL THEN p.title ELSE NULLIF(btrim($3), '') END,
             updated_at = now()
         WHERE p.id = $1
         RETURNING {POST_COLUMNS}"
    ))
    .bind(id)
    .bind(patch.category.as_deref())
    .bind(patch.title.as_deref())
    .fetch_optional(pool)
    .await?;
    let row = row.ok_or(PostError::NotFound)?;
    let post = post_from_row(&row)?;
    tracing::info!(%id, status = post.status().as_str(), "post moderated");
    Ok(post)
}

pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<(), PostError> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(PostError::NotFound);
    }
    tracing::info!(%id, "post deleted");
    Ok(())
}

// =============================================================================
// SCRAPER UPSERT
// =============================================================================

/// Insert or refresh posts by `external_id`, returning how many were new.
///
/// Moderator-assigned category and title survive a refresh; the feed only
/// fills them when they are still empty.
pub async fn upsert_posts(pool: &PgPool, posts: &[NewPost]) -> Result<u64, PostError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0_u64;

    for post in posts {
        let external_id = post.external_id.trim();
        if external_id.is_empty() {
            return Err(PostError::MissingExternalId);
        }
        let was_inserted: bool = sqlx::query_scalar(
            r"INSERT INTO posts (external_id, author, body, stats, posted_at, posted_ts, media, document, category, title, url)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NULLIF(btrim($9), ''), NULLIF(btrim($10), ''), $11)
              ON CONFLICT (external_id) DO UPDATE
              SET author = EXCLUDED.author,
                  body = EXCLUDED.body,
                  stats = EXCLUDED.stats,
                  posted_at = EXCLUDED.posted_at,
                  posted_ts = EXCLUDED.posted_ts,
                  media = EXCLUDED.media,
                  document = EXCLUDED.document,
                  url = EXCLUDED.url,
                  category = COALESCE(posts.category, EXCLUDED.category),
                  title = COALESCE(posts.title, EXCLUDED.title),
                  updated_at = now()
              RETURNING (xmax = 0) AS inserted",
        )
        .bind(external_id)
        .bind(Json(&post.author))
        .bind(&post.text)
        .bind(Json(&post.stats))
        .bind(Json(&post.posted_at))
        .bind(post.posted_at.timestamp)
        .bind(post.media.as_ref().map(Json))
        .bind(post.document.as_ref().map(Json))
        .bind(post.category.as_deref())
        .bind(post.title.as_deref())
        .bind(post.url.as_deref())
        .fetch_one(&mut *tx)
        .await?;
        if was_inserted {
            inserted += 1;
        }
    }

    tx.commit().await?;
    Ok(inserted)
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
