//! Password-reset tokens.
//!
//! Tokens are random 32-byte hex strings mailed to the user; only their
//! SHA-256 hash is stored. A token is valid for one hour and is consumed
//! atomically together with the password update.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::accounts::{self, AccountError};
use super::session::{self, bytes_to_hex};
use crate::config::{Config, ResendConfig};

const RESET_TEMPLATE: &str = include_str!("../../templates/password_reset.html");
const RESET_SUBJECT: &str = "Reset your Universe password";

#[derive(Debug, thiserror::Error)]
pub enum ResetError {
    #[error("invalid or expired reset link")]
    InvalidToken,
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

#[must_use]
pub fn hash_reset_token(token: &str) -> String {
    let digest = Sha256::digest(token.trim().as_bytes());
    bytes_to_hex(&digest)
}

#[must_use]
pub fn reset_link(app_base_url: &str, token: &str) -> String {
    format!("{}/reset-password?token={token}", app_base_url.trim_end_matches('/'))
}

#[must_use]
pub fn render_reset_template(email: &str, link: &str) -> String {
    RESET_TEMPLATE
        .replace("{{EMAIL}}", email)
        .replace("{{LINK}}", link)
}

/// Issue a reset token for `email` if an account exists.
///
/// Returns `Ok(None)` for unknown or malformed addresses; callers must not
/// reveal the difference. Earlier unconsumed tokens for the user are dropped.
pub async fn request_reset(pool: &PgPool, email: &str) -> Result<Option<(String, String)>, ResetError> {
    let Some(email) = models::user::normalize_email(email) else {
        return Ok(None);
    };
    let user_id: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    let Some(user_id) = user_id else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM password_resets WHERE user_id = $1 AND consumed_at IS NULL")
        .bind(user_id)
        .execute(pool)
        .await?;

    let token = session::generate_token();
    sqlx::query("INSERT INTO password_resets (user_id, token_hash) VALUES ($1, $2)")
        .bind(user_id)
        .bind(hash_reset_token(&token))
        .execute(pool)
        .await?;

    Ok(Some((email, token)))
}

/// Consume `token` and set `new_password`. All sessions of the user are revoked.
pub async fn confirm_reset(pool: &PgPool, token: &str, new_password: &str) -> Result<Uuid, ResetError> {
    models::user::validate_new_password(new_password).map_err(AccountError::WeakPassword)?;
    if token.trim().is_empty() {
        return Err(ResetError::InvalidToken);
    }

    let mut tx = pool.begin().await?;
    let row = sqlx::query(
        r"UPDATE password_resets
          SET consumed_at = now()
          WHERE token_hash = $1 AND consumed_at IS NULL AND expires_at > now()
          RETURNING user_id",
    )
    .bind(hash_reset_token(token))
    .fetch_optional(&mut *tx)
    .await?;
    let Some(row) = row else {
        return Err(ResetError::InvalidToken);
    };
    let user_id: Uuid = row.get("user_id");

    accounts::set_password(&mut *tx, user_id, new_password.to_owned()).await?;
    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(%user_id, "password reset completed");
    Ok(user_id)
}

/// Deliver the reset link by email, or log it when email is not configured.
pub async fn deliver_reset_link(config: &Config, email: &str, token: &str) -> Result<(), ResetError> {
    let link = reset_link(&config.app_base_url, token);
    match &config.resend {
        Some(resend) => send_reset_email(resend, email, &link).await,
        None => {
            tracing::debug!(%email, %link, "email not configured; password reset link logged");
            Ok(())
        }
    }
}

async fn send_reset_email(resend: &ResendConfig, to_email: &str, link: &str) -> Result<(), ResetError> {
    let client = Resend::new(&resend.api_key);
    let to = [to_email];
    let html = render_reset_template(to_email, link);

    let email = CreateEmailBaseOptions::new(&resend.from, to, RESET_SUBJECT).with_html(&html);
    client
        .emails
        .send(email)
        .await
        .map_err(|e| ResetError::EmailDelivery(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod tests;
