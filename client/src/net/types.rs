//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Catalog, post, and page types come from `models` unchanged. The types here
//! mirror server-only payloads (session user, scraper runs, request bodies)
//! field-for-field so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use models::user::Role;
use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/auth/me` and `/api/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub has_avatar: bool,
    /// `YYYY-MM-DD` of account creation.
    #[serde(default)]
    pub member_since: Option<String>,
}

impl User {
    /// Avatar URL, with `version` appended so a fresh upload bypasses the cache.
    #[must_use]
    pub fn avatar_url(&self, version: u32) -> Option<String> {
        self.has_avatar.then(|| format!("/api/users/{}/avatar?v={version}", self.id))
    }

    /// Up to two uppercase initials for the avatar placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "?".to_owned() } else { initials }
    }
}

/// Body for `PATCH /api/users/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub name: String,
    pub university: Option<String>,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
}

impl ProfileForm {
    /// Pre-fill the edit form from the current user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            university: user.university.clone(),
            specialty: user.specialty.clone(),
            bio: user.bio.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Body for `PATCH /api/admin/posts/:id`. `None` leaves a field unchanged;
/// an empty string clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Lifecycle of one scraper run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
    Stopped,
}

impl RunStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Stopped => "Stopped",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Stopped => "stopped",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperRun {
    pub id: String,
    pub started_at: String,
    #[serde(default)]
    pub finished_at: Option<String>,
    pub status: RunStatus,
    pub fetched: i32,
    pub inserted: i32,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /api/admin/scraper`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperStatus {
    pub running: bool,
    #[serde(default)]
    pub current_run: Option<String>,
    pub feed_configured: bool,
    #[serde(default)]
    pub recent_runs: Vec<ScraperRun>,
}

/// `{ "error": "..." }` body returned by every failing API call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
