//! Profile pictures stored as bytes in Postgres.
//!
//! The client crops and re-encodes to JPEG before upload, but the server
//! trusts nothing: the content type is sniffed from magic bytes and must
//! agree with an allow-list.

use sqlx::{PgPool, Row};
use uuid::Uuid;

pub use models::user::MAX_AVATAR_BYTES;

#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("image is empty")]
    Empty,
    #[error("image exceeds {MAX_AVATAR_BYTES} bytes")]
    TooLarge,
    #[error("unsupported image type")]
    UnsupportedType,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Identify JPEG, PNG, or WebP by signature.
#[must_use]
pub fn sniff_content_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Validate an upload and return its detected content type.
///
/// # Errors
///
/// Rejects empty bodies, bodies over [`MAX_AVATAR_BYTES`], and anything that
/// is not a JPEG, PNG, or WebP image.
pub fn validate_avatar(bytes: &[u8]) -> Result<&'static str, AvatarError> {
    if bytes.is_empty() {
        return Err(AvatarError::Empty);
    }
    if bytes.len() > MAX_AVATAR_BYTES {
        return Err(AvatarError::TooLarge);
    }
    sniff_content_type(bytes).ok_or(AvatarError::UnsupportedType)
}

/// Store or replace the avatar for `user_id`.
pub async fn put_avatar(pool: &PgPool, user_id: Uuid, bytes: &[u8]) -> Result<(), AvatarError> {
    let content_type = validate_avatar(bytes)?;
    sqlx::query(
        r"INSERT INTO user_avatars (user_id, content_type, bytes)
          VALUES ($1, $2, $3)
          ON CONFLICT (user_id) DO UPDATE
          SET content_type = EXCLUDED.content_type, bytes = EXCLUDED.bytes, updated_at = now()",
    )
    .bind(user_id)
    .bind(content_type)
    .bind(bytes)
    .execute(pool)
    .await?;
    tracing::debug!(%user_id, content_type, size = bytes.len(), "avatar stored");
    Ok(())
}

pub async fn get_avatar(pool: &PgPool, user_id: Uuid) -> Result<Option<Avatar>, AvatarError> {
    let row = sqlx::query("SELECT content_type, bytes FROM user_avatars WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| Avatar { content_type: r.get("content_type"), bytes: r.get("bytes") }))
}

#[cfg(test)]
#[path = "avatars_test.rs"]
mod tests;
