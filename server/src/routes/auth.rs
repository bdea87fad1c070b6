//! Auth routes: registration, password login, session cookie, password reset.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use models::user::{Role, normalize_email};
use serde::Deserialize;
use time::Duration;

use super::api_error;
use crate::services::accounts::{self, AccountError, NewAccount};
use crate::services::password_reset::{self, ResetError};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const SESSION_DAYS: i64 = 30;

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_DAYS))
        .build()
}

pub(crate) fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated user holding the admin role.
pub struct AdminUser(pub AuthUser);

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_role(auth.user.role, &[Role::Admin])?;
        Ok(Self(auth))
    }
}

pub(crate) fn require_role(role: Role, allowed: &[Role]) -> Result<(), StatusCode> {
    if role.is_allowed(allowed) { Ok(()) } else { Err(StatusCode::FORBIDDEN) }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::InvalidEmail
        | AccountError::InvalidName
        | AccountError::WeakPassword(_)
        | AccountError::FieldTooLong(_)
        | AccountError::PasswordRequired => StatusCode::BAD_REQUEST,
        AccountError::EmailTaken | AccountError::SelfModification => StatusCode::CONFLICT,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::WrongPassword => StatusCode::FORBIDDEN,
        AccountError::NotFound => StatusCode::NOT_FOUND,
        AccountError::Hash(_) | AccountError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn account_error_response(err: AccountError) -> Response {
    let status = account_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "account operation failed");
    }
    api_error(status, &err)
}

pub(crate) fn reset_error_to_status(err: &ResetError) -> StatusCode {
    match err {
        ResetError::InvalidToken => StatusCode::BAD_REQUEST,
        ResetError::Account(inner) => account_error_to_status(inner),
        ResetError::Db(_) | ResetError::EmailDelivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reset_error_response(err: ResetError) -> Response {
    let status = reset_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "password reset failed");
    }
    api_error(status, &err)
}

fn internal_error(context: &'static str, err: &impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "{context}");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, err)
}

/// Key used to throttle login attempts for an address.
pub(crate) fn login_throttle_key(email: &str) -> String {
    normalize_email(email).unwrap_or_else(|| email.trim().to_ascii_lowercase())
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RegisterBody {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// `POST /api/auth/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, CookieJar, Json<SessionUser>), Response> {
    let input = NewAccount { email: body.email, name: body.name, password: body.password };
    let user_id = accounts::register(&state.pool, input, state.config.bootstrap_admin_email.as_deref())
        .await
        .map_err(account_error_response)?;
    let token = session::create_session(&state.pool, user_id)
        .await
        .map_err(|e| internal_error("session creation failed", &e))?;
    let user = accounts::get_user(&state.pool, user_id)
        .await
        .map_err(account_error_response)?;

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((StatusCode::CREATED, jar, Json(user)))
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login`: verify credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<(CookieJar, Json<SessionUser>), Response> {
    let key = login_throttle_key(&body.email);
    if let Err(e) = state.login_limiter.check_and_record(&key) {
        tracing::warn!(email = %key, "login throttled");
        return Err(api_error(StatusCode::TOO_MANY_REQUESTS, &e));
    }

    let user_id = accounts::authenticate(&state.pool, &body.email, &body.password)
        .await
        .map_err(account_error_response)?;
    state.login_limiter.reset(&key);

    let token = session::create_session(&state.pool, user_id)
        .await
        .map_err(|e| internal_error("session creation failed", &e))?;
    let user = accounts::get_user(&state.pool, user_id)
        .await
        .map_err(account_error_response)?;

    tracing::info!(%user_id, "user logged in");
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(user)))
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete the session if any, always clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()) {
        if let Err(e) = session::delete_session(&state.pool, &token).await {
            tracing::warn!(error = %e, "session delete failed during logout");
        }
    }
    let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ResetRequestBody {
    pub email: String,
}

/// `POST /api/auth/password-reset/request`: always 200; never reveals
/// whether the address has an account.
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(body): Json<ResetRequestBody>,
) -> Json<serde_json::Value> {
    match password_reset::request_reset(&state.pool, &body.email).await {
        Ok(Some((email, token))) => {
            let config = state.config.clone();
            tokio::spawn(async move {
                if let Err(e) = password_reset::deliver_reset_link(&config, &email, &token).await {
                    tracing::error!(error = %e, "password reset email failed");
                }
            });
        }
        Ok(None) => tracing::debug!("password reset requested for unknown address"),
        Err(e) => tracing::error!(error = %e, "password reset request failed"),
    }
    Json(serde_json::json!({ "ok": true }))
}

#[derive(Deserialize)]
pub struct ResetConfirmBody {
    pub token: String,
    pub password: String,
}

/// `POST /api/auth/password-reset/confirm`: consume a token and set a new password.
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(body): Json<ResetConfirmBody>,
) -> Result<Json<serde_json::Value>, Response> {
    password_reset::confirm_reset(&state.pool, &body.token, &body.password)
        .await
        .map_err(reset_error_response)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
