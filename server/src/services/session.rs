//! Session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses opaque random tokens stored in an HttpOnly cookie. The
//! `sessions` table is the single source of truth: validating a request is a
//! join against `users`, and revoking access is a row delete.
//!
//! TRADE-OFFS
//! ==========
//! Tokens are stored in clear in the database. They carry no information of
//! their own, so a leaked row grants at most the remainder of one session.

use std::fmt::Write;

use models::user::Role;
use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation and profile reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub university: Option<String>,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub has_avatar: bool,
    /// `YYYY-MM-DD` of account creation.
    pub member_since: Option<String>,
}

/// Columns selected for a [`SessionUser`] from `users u`.
pub(crate) const USER_COLUMNS: &str = r"u.id, u.email, u.name, u.role, u.university, u.specialty, u.bio, u.phone,
    EXISTS (SELECT 1 FROM user_avatars a WHERE a.user_id = u.id) AS has_avatar,
    to_char(u.created_at, 'YYYY-MM-DD') AS member_since";

pub(crate) fn user_from_row(row: &sqlx::postgres::PgRow) -> SessionUser {
    let role: String = row.get("role");
    SessionUser {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: Role::parse(&role).unwrap_or_default(),
        university: row.get("university"),
        specialty: row.get("specialty"),
        bio: row.get("bio"),
        phone: row.get("phone"),
        has_avatar: row.get("has_avatar"),
        member_since: row.get("member_since"),
    }
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let sql = format!(
        "SELECT {USER_COLUMNS}
         FROM sessions s
         JOIN users u ON u.id = s.user_id
         WHERE s.token = $1 AND s.expires_at > now()"
    );
    let row = sqlx::query(&sql).bind(token).fetch_optional(pool).await?;
    Ok(row.as_ref().map(user_from_row))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete every session of `user_id` except `keep`, if given.
pub async fn revoke_user_sessions(pool: &PgPool, user_id: Uuid, keep: Option<&str>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND ($2::text IS NULL OR token <> $2)")
        .bind(user_id)
        .bind(keep)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Remove expired sessions and reset tokens.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let sessions = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?
        .rows_affected();
    let resets = sqlx::query("DELETE FROM password_resets WHERE expires_at <= now() OR consumed_at IS NOT NULL")
        .execute(pool)
        .await?
        .rows_affected();
    Ok(sessions + resets)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
