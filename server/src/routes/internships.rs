//! Public internship listing backed by moderated posts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use models::page::{Page, PageRequest};
use models::post::LinkedInPost;
use serde::Deserialize;
use uuid::Uuid;

use super::api_error;
use crate::services::posts::{self, PostError, PostQuery};
use crate::state::AppState;

pub(crate) fn post_error_to_status(err: &PostError) -> StatusCode {
    match err {
        PostError::NotFound => StatusCode::NOT_FOUND,
        PostError::MissingExternalId => StatusCode::BAD_REQUEST,
        PostError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn post_error_response(err: PostError) -> Response {
    let status = post_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "post operation failed");
    }
    api_error(status, &err)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
    pub category: Option<String>,
}

/// `GET /api/internships`: published posts, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<LinkedInPost>>, Response> {
    let request = PageRequest::normalized(params.page, params.per_page);
    let query = PostQuery { q: params.q, category: params.category };
    posts::list_published(&state.pool, &query, request)
        .await
        .map(Json)
        .map_err(post_error_response)
}

/// `GET /api/internships/categories`
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, Response> {
    posts::list_categories(&state.pool)
        .await
        .map(Json)
        .map_err(post_error_response)
}

/// `GET /api/internships/:id`
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<LinkedInPost>, Response> {
    posts::get_published(&state.pool, id)
        .await
        .map(Json)
        .map_err(post_error_response)
}

#[cfg(test)]
#[path = "internships_test.rs"]
mod tests;
