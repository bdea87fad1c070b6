//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failing call resolves to a user-facing message: the server's
//! `{ "error": ... }` text when present, otherwise a canned message keyed on
//! the status code. Pages render it inline; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::page::Page;
use models::post::{LinkedInPost, PostStatus};
use models::user::Role;

use super::types::{PostPatch, ProfileForm, ScraperStatus, User};

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

#[cfg(not(feature = "hydrate"))]
const SERVER_ONLY: &str = "not available on server";

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Message for a failed response, preferring the server's own error text.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let text = parsed.error.trim();
        if !text.is_empty() {
            return text.to_owned();
        }
    }
    match status {
        401 => "Please sign in to continue.".to_owned(),
        403 => "You do not have permission to do that.".to_owned(),
        404 => "Not found.".to_owned(),
        413 => "That file is too large.".to_owned(),
        429 => "Too many attempts. Please wait and try again.".to_owned(),
        500..=599 => "Something went wrong. Please try again.".to_owned(),
        other => format!("request failed: {other}"),
    }
}

/// Query parameters for paginated list endpoints. Blank filters are omitted.
#[cfg(any(test, feature = "hydrate"))]
fn list_query(page: u32, filters: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.max(1).to_string())];
    params.extend(
        filters
            .iter()
            .map(|(key, value)| (*key, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key, value.to_owned())),
    );
    params
}

#[cfg(any(test, feature = "hydrate"))]
fn internship_endpoint(id: &str) -> String {
    format!("/api/internships/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_user_endpoint(id: &str) -> String {
    format!("/api/admin/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_post_endpoint(id: &str) -> String {
    format!("/api/admin/posts/{id}")
}

/// Value of the `status` filter sent to `/api/admin/posts`.
#[cfg(any(test, feature = "hydrate"))]
fn status_filter_value(status: Option<PostStatus>) -> &'static str {
    status.map_or("all", PostStatus::as_str)
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), String> {
    if resp.ok() { Ok(()) } else { Err(failure(resp).await) }
}

#[cfg(feature = "hydrate")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<gloo_net::http::Response, String> {
    request.map_err(|e| e.to_string())?.send().await.map_err(|e| e.to_string())
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message on bad credentials or throttling.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = send(gloo_net::http::Request::post("/api/auth/login").json(&payload)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Create an account via `POST /api/auth/register`; the response also signs
/// the new user in.
///
/// # Errors
///
/// Returns the server's message for invalid input or a taken email.
pub async fn register(email: &str, name: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "name": name, "password": password });
        let resp = send(gloo_net::http::Request::post("/api/auth/register").json(&payload)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, name, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Ask for a reset link via `POST /api/auth/password-reset/request`.
///
/// # Errors
///
/// Only transport failures; the server answers 200 for every address.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = send(gloo_net::http::Request::post("/api/auth/password-reset/request").json(&payload)).await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Set a new password with a reset token via `POST /api/auth/password-reset/confirm`.
///
/// # Errors
///
/// Returns the server's message for an invalid, expired, or used token.
pub async fn confirm_password_reset(token: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": password });
        let resp = send(gloo_net::http::Request::post("/api/auth/password-reset/confirm").json(&payload)).await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Save profile fields via `PATCH /api/users/me`.
///
/// # Errors
///
/// Returns the server's validation message.
pub async fn update_profile(form: &ProfileForm) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::patch("/api/users/me").json(form)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Change password via `PUT /api/users/me/password`.
///
/// # Errors
///
/// Returns the server's message when the current password is wrong or the
/// new one is too weak.
pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "current_password": current, "new_password": new });
        let resp = send(gloo_net::http::Request::put("/api/users/me/password").json(&payload)).await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Delete the account via `DELETE /api/users/me`. The server clears the
/// session cookie on success.
///
/// # Errors
///
/// Returns the server's message when the password is missing or wrong.
pub async fn delete_account(password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "password": password });
        let resp = send(gloo_net::http::Request::delete("/api/users/me").json(&payload)).await?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = password;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Upload a cropped avatar via `PUT /api/users/me/avatar` as a raw body.
///
/// # Errors
///
/// Returns the server's message for oversize or unsupported images.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(blob: &web_sys::Blob, content_type: &str) -> Result<(), String> {
    let request = gloo_net::http::Request::put("/api/users/me/avatar")
        .header("Content-Type", content_type)
        .body(blob.clone());
    let resp = send(request).await?;
    expect_ok(resp).await
}

// =============================================================================
// INTERNSHIPS
// =============================================================================

/// One page of published internships via `GET /api/internships`.
///
/// # Errors
///
/// Returns a message when the request fails.
pub async fn fetch_internships(page: u32, q: &str, category: &str) -> Result<Page<LinkedInPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = list_query(page, &[("q", q), ("category", category)]);
        let resp = gloo_net::http::Request::get("/api/internships")
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, q, category);
        Err(SERVER_ONLY.to_owned())
    }
}

/// A single published internship via `GET /api/internships/:id`.
///
/// # Errors
///
/// Returns "Not found." for unknown or unpublished posts.
pub async fn fetch_internship(id: &str) -> Result<LinkedInPost, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&internship_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Categories used by published internships. Empty on failure.
pub async fn fetch_categories() -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/internships/categories").send().await else {
            return Vec::new();
        };
        read_json(resp).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// One page of accounts via `GET /api/admin/users`.
///
/// # Errors
///
/// Returns a message when the request fails or the caller is not an admin.
pub async fn fetch_admin_users(page: u32, q: &str) -> Result<Page<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = list_query(page, &[("q", q)]);
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, q);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Change a user's role via `PATCH /api/admin/users/:id`.
///
/// # Errors
///
/// Returns the server's message, including the self-demotion refusal.
pub async fn set_user_role(id: &str, role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "role": role.as_str() });
        let resp = send(gloo_net::http::Request::patch(&admin_user_endpoint(id)).json(&payload)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, role);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Delete a user via `DELETE /api/admin/users/:id`.
///
/// # Errors
///
/// Returns the server's message, including the self-deletion refusal.
pub async fn delete_user(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&admin_user_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// One page of posts for moderation via `GET /api/admin/posts`.
///
/// # Errors
///
/// Returns a message when the request fails.
pub async fn fetch_admin_posts(page: u32, status: Option<PostStatus>) -> Result<Page<LinkedInPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = list_query(page, &[("status", status_filter_value(status))]);
        let resp = gloo_net::http::Request::get("/api/admin/posts")
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, status);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Set category/title via `PATCH /api/admin/posts/:id`.
///
/// # Errors
///
/// Returns a message when the post is gone or the request fails.
pub async fn update_post(id: &str, patch: &PostPatch) -> Result<LinkedInPost, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::patch(&admin_post_endpoint(id)).json(patch)).await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(SERVER_ONLY.to_owned())
    }
}

/// Delete a post via `DELETE /api/admin/posts/:id`.
///
/// # Errors
///
/// Returns a message when the post is gone or the request fails.
pub async fn delete_post(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&admin_post_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Scraper state and recent runs via `GET /api/admin/scraper`.
///
/// # Errors
///
/// Returns a message when the request fails.
pub async fn fetch_scraper_status() -> Result<ScraperStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/scraper")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct RunIdResponse {
    run_id: String,
}

/// Start a scraper run via `POST /api/admin/scraper/start`; returns the run id.
///
/// # Errors
///
/// Returns the server's message when a run is already active or no feed is
/// configured.
pub async fn start_scraper() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/admin/scraper/start")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: RunIdResponse = read_json(resp).await?;
        Ok(body.run_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// Abort the active run via `POST /api/admin/scraper/stop`.
///
/// # Errors
///
/// Returns the server's message when nothing is running.
pub async fn stop_scraper() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/admin/scraper/stop")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}
