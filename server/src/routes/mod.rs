//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API handlers return JSON errors shaped as
//! `{ "error": "<message>" }` so the client can show them inline.

pub mod admin;
pub mod auth;
pub mod internships;
pub mod universities;
pub mod users;

use std::fmt::Display;
use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::avatars::MAX_AVATAR_BYTES;
use crate::state::AppState;

const GENERIC_SERVER_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// JSON error response. Server errors never leak their details.
pub(crate) fn api_error(status: StatusCode, err: &impl Display) -> Response {
    let error = if status.is_server_error() { GENERIC_SERVER_ERROR.to_owned() } else { err.to_string() };
    (status, Json(ErrorBody { error })).into_response()
}

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/password-reset/request", post(auth::request_password_reset))
        .route("/api/auth/password-reset/confirm", post(auth::confirm_password_reset))
        .route(
            "/api/users/me",
            get(users::get_me)
                .patch(users::update_me)
                .delete(users::delete_me),
        )
        .route("/api/users/me/password", put(users::change_password))
        .route(
            "/api/users/me/avatar",
            put(users::upload_avatar).layer(DefaultBodyLimit::max(MAX_AVATAR_BYTES)),
        )
        .route("/api/users/{id}/avatar", get(users::get_avatar))
        .route("/api/internships", get(internships::list))
        .route("/api/internships/categories", get(internships::categories))
        .route("/api/internships/{id}", get(internships::get_one))
        .route("/api/universities", get(universities::list))
        .route("/api/universities/licenses", get(universities::by_license))
        .route("/api/universities/{id}", get(universities::get_one))
        .route("/api/universities/{id}/chances", get(universities::chances))
        .route("/api/admin/users", get(admin::list_users))
        .route(
            "/api/admin/users/{id}",
            patch(admin::update_user).delete(admin::delete_user),
        )
        .route("/api/admin/posts", get(admin::list_posts))
        .route(
            "/api/admin/posts/{id}",
            patch(admin::update_post).delete(admin::delete_post),
        )
        .route("/api/admin/scraper", get(admin::scraper_status))
        .route("/api/admin/scraper/start", post(admin::start_scraper))
        .route("/api/admin/scraper/stop", post(admin::stop_scraper))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR for every page + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
