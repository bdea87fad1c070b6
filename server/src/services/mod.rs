//! Domain services used by HTTP routes and background tasks.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod accounts;
pub mod avatars;
pub mod password_reset;
pub mod posts;
pub mod scraper;
pub mod session;

/// Build an `ILIKE` pattern matching `query` as a literal substring.
/// Returns `None` for a blank query.
pub(crate) fn like_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(trimmed.len() + 2);
    escaped.push('%');
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
