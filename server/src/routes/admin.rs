//! Admin routes: user management, post moderation, scraper control.
//!
//! Every handler takes [`AdminUser`], so non-admins get 403 before any
//! work happens.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use models::page::{Page, PageRequest};
use models::post::{LinkedInPost, PostStatus};
use models::user::Role;
use serde::Deserialize;
use uuid::Uuid;

use super::api_error;
use super::auth::{AdminUser, account_error_response};
use super::internships::post_error_response;
use crate::services::accounts;
use crate::services::posts::{self, PostPatch};
use crate::services::scraper::{ScraperError, ScraperStatus};
use crate::services::session::SessionUser;
use crate::state::AppState;

pub(crate) fn scraper_error_to_status(err: &ScraperError) -> StatusCode {
    match err {
        ScraperError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ScraperError::AlreadyRunning | ScraperError::NotRunning => StatusCode::CONFLICT,
        ScraperError::Fetch(_) | ScraperError::Feed(_) => StatusCode::BAD_GATEWAY,
        ScraperError::Post(_) | ScraperError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn scraper_error_response(err: ScraperError) -> Response {
    let status = scraper_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "scraper operation failed");
    }
    api_error(status, &err)
}

/// Parse the `status` filter. Blank or `all` means no filter.
pub(crate) fn parse_status_filter(raw: Option<&str>) -> Result<Option<PostStatus>, Response> {
    match raw.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some(value) => PostStatus::parse(value)
            .map(Some)
            .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, &format!("unknown status {value:?}"))),
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct UserListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    #[serde(default)]
    pub q: String,
}

/// `GET /api/admin/users`
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<UserListParams>,
) -> Result<Json<Page<SessionUser>>, Response> {
    let request = PageRequest::normalized(params.page, params.per_page);
    accounts::list_users(&state.pool, &params.q, request)
        .await
        .map(Json)
        .map_err(account_error_response)
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub role: String,
}

/// `PATCH /api/admin/users/:id`: change role.
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<SessionUser>, Response> {
    let Some(role) = Role::parse(&body.role) else {
        return Err(api_error(StatusCode::BAD_REQUEST, &format!("unknown role {:?}", body.role)));
    };
    accounts::set_role(&state.pool, admin.user.id, user_id, role)
        .await
        .map(Json)
        .map_err(account_error_response)
}

/// `DELETE /api/admin/users/:id`
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    accounts::delete_user(&state.pool, admin.user.id, user_id)
        .await
        .map_err(account_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// POSTS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
}

/// `GET /api/admin/posts?status=published|flagged|all`
pub async fn list_posts(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PostListParams>,
) -> Result<Json<Page<LinkedInPost>>, Response> {
    let status = parse_status_filter(params.status.as_deref())?;
    let request = PageRequest::normalized(params.page, params.per_page);
    posts::list_for_admin(&state.pool, status, request)
        .await
        .map(Json)
        .map_err(post_error_response)
}

/// `PATCH /api/admin/posts/:id`: set category and/or title.
pub async fn update_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<Uuid>,
    Json(patch): Json<PostPatch>,
) -> Result<Json<LinkedInPost>, Response> {
    posts::update_post(&state.pool, post_id, &patch)
        .await
        .map(Json)
        .map_err(post_error_response)
}

/// `DELETE /api/admin/posts/:id`
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    posts::delete_post(&state.pool, post_id)
        .await
        .map_err(post_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// SCRAPER
// =============================================================================

/// `GET /api/admin/scraper`
pub async fn scraper_status(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<ScraperStatus>, Response> {
    state
        .scraper
        .status(&state.pool)
        .await
        .map(Json)
        .map_err(scraper_error_response)
}

/// `POST /api/admin/scraper/start`
pub async fn start_scraper(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<(StatusCode, Json<serde_json::Value>), Response> {
    let run_id = state
        .scraper
        .start(&state.pool)
        .await
        .map_err(scraper_error_response)?;
    tracing::info!(%run_id, admin = %admin.user.id, "scraper started by admin");
    Ok((StatusCode::ACCEPTED, Json(serde_json::json!({ "run_id": run_id }))))
}

/// `POST /api/admin/scraper/stop`
pub async fn stop_scraper(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<Json<serde_json::Value>, Response> {
    let run_id = state
        .scraper
        .stop(&state.pool)
        .await
        .map_err(scraper_error_response)?;
    tracing::info!(%run_id, admin = %admin.user.id, "scraper stopped by admin");
    Ok(Json(serde_json::json!({ "run_id": run_id })))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
