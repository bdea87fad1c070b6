//! Internship postings scraped from LinkedIn.
//!
//! A post is "published" once moderation has given it both a category and a
//! title; anything else is "flagged" and stays out of the public listing.

#[cfg(test)]
#[path = "post_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Reaction counts by LinkedIn reaction type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionCounts {
    pub like: u32,
    pub celebrate: u32,
    pub support: u32,
    pub love: u32,
    pub insightful: u32,
    pub funny: u32,
}

impl ReactionCounts {
    #[must_use]
    pub fn total(&self) -> u64 {
        [self.like, self.celebrate, self.support, self.love, self.insightful, self.funny]
            .iter()
            .map(|n| u64::from(*n))
            .sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStats {
    pub reactions: ReactionCounts,
    pub comments: u32,
    pub reposts: u32,
}

impl PostStats {
    #[must_use]
    pub fn total_reactions(&self) -> u64 {
        self.reactions.total()
    }
}

/// When the post was published, as the source reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedAt {
    /// ISO-8601 date.
    pub date: String,
    /// Human-relative string such as `"3d"` or `"1w"`.
    #[serde(default)]
    pub relative: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMedia {
    /// `"image"`, `"video"`, ...
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub page_count: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Flagged,
}

impl PostStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Flagged => "flagged",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "published" => Some(Self::Published),
            "flagged" => Some(Self::Flagged),
            _ => None,
        }
    }

    /// Published iff both category and title are present and not blank.
    #[must_use]
    pub fn derive(category: Option<&str>, title: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
        if present(category) && present(title) {
            Self::Published
        } else {
            Self::Flagged
        }
    }
}

/// A scraped post as served by the internships API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInPost {
    pub id: String,
    /// Identifier assigned by the source; unique.
    pub external_id: String,
    pub author: PostAuthor,
    pub text: String,
    #[serde(default)]
    pub stats: PostStats,
    pub posted_at: PostedAt,
    #[serde(default)]
    pub media: Option<PostMedia>,
    #[serde(default)]
    pub document: Option<PostDocument>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl LinkedInPost {
    #[must_use]
    pub fn status(&self) -> PostStatus {
        PostStatus::derive(self.category.as_deref(), self.title.as_deref())
    }

    /// Title if set, otherwise the first line of the body.
    #[must_use]
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => self.text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or_default().to_owned(),
        }
    }

    /// Body truncated to at most `max_chars` characters, with an ellipsis when cut.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.text, max_chars)
    }
}

/// Truncate on a character boundary, appending `…` when text was dropped.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
