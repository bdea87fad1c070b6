//! Profile routes for the signed-in user, plus public avatar reads.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use uuid::Uuid;

use super::api_error;
use super::auth::{AuthUser, account_error_response, clear_session_cookie};
use crate::services::accounts::{self, ProfileUpdate};
use crate::services::avatars::{self, AvatarError};
use crate::services::session::SessionUser;
use crate::state::AppState;

pub(crate) fn avatar_error_to_status(err: &AvatarError) -> StatusCode {
    match err {
        AvatarError::Empty => StatusCode::BAD_REQUEST,
        AvatarError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        AvatarError::UnsupportedType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AvatarError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn avatar_error_response(err: AvatarError) -> Response {
    let status = avatar_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "avatar operation failed");
    }
    api_error(status, &err)
}

/// `GET /api/users/me`: fresh profile read.
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<SessionUser>, Response> {
    accounts::get_user(&state.pool, auth.user.id)
        .await
        .map(Json)
        .map_err(account_error_response)
}

#[derive(Deserialize)]
pub struct ProfileBody {
    pub name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<ProfileBody> for ProfileUpdate {
    fn from(body: ProfileBody) -> Self {
        Self { name: body.name, university: body.university, specialty: body.specialty, bio: body.bio, phone: body.phone }
    }
}

/// `PATCH /api/users/me`: replace editable profile fields.
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProfileBody>,
) -> Result<Json<SessionUser>, Response> {
    accounts::update_profile(&state.pool, auth.user.id, body.into())
        .await
        .map(Json)
        .map_err(account_error_response)
}

#[derive(Deserialize)]
pub struct DeleteAccountBody {
    #[serde(default)]
    pub password: String,
}

/// `DELETE /api/users/me`: delete own account; requires the current password.
pub async fn delete_me(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
    Json(body): Json<DeleteAccountBody>,
) -> Result<impl IntoResponse, Response> {
    accounts::delete_account(&state.pool, auth.user.id, &body.password)
        .await
        .map_err(account_error_response)?;
    let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
    Ok((jar, StatusCode::NO_CONTENT))
}

#[derive(Deserialize)]
pub struct ChangePasswordBody {
    pub current_password: String,
    pub new_password: String,
}

/// `PUT /api/users/me/password`: change password; other sessions are revoked.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ChangePasswordBody>,
) -> Result<StatusCode, Response> {
    accounts::change_password(&state.pool, auth.user.id, &auth.token, &body.current_password, &body.new_password)
        .await
        .map_err(account_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/users/me/avatar`: raw image body.
pub async fn upload_avatar(State(state): State<AppState>, auth: AuthUser, body: Bytes) -> Result<StatusCode, Response> {
    avatars::put_avatar(&state.pool, auth.user.id, &body)
        .await
        .map_err(avatar_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/users/:id/avatar`: image bytes.
pub async fn get_avatar(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Result<Response, Response> {
    let avatar = avatars::get_avatar(&state.pool, user_id)
        .await
        .map_err(avatar_error_response)?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, &"avatar not found"))?;
    Ok((
        [(header::CONTENT_TYPE, avatar.content_type), (header::CACHE_CONTROL, "no-cache".to_owned())],
        avatar.bytes,
    )
        .into_response())
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
