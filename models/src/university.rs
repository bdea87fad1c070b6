//! University records for the engineering-cycle admissions directory.
//!
//! DESIGN
//! ======
//! Records are read-only and bundled with the application. The specialty
//! `license` field arrives either as a single string or as a list of strings;
//! it is normalized into [`LicenseSet`] during deserialization so callers never
//! branch on the shape.

#[cfg(test)]
#[path = "university_test.rs"]
mod tests;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sort key used for universities without a national ranking.
pub const UNRANKED_SENTINEL: u32 = u32::MAX;

// =============================================================================
// ENUMS
// =============================================================================

/// Admission channel category of a school.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UniversityType {
    Specific,
    Independent,
    PedagogicalResource,
}

impl UniversityType {
    pub const ALL: [Self; 3] = [Self::Specific, Self::Independent, Self::PedagogicalResource];

    /// Wire value, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Specific => "specific",
            Self::Independent => "independent",
            Self::PedagogicalResource => "pedagogical-resource",
        }
    }

    /// Human-readable label for selectors and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Specific => "Specific",
            Self::Independent => "Independent",
            Self::PedagogicalResource => "Pedagogical Resource",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }
}

impl fmt::Display for UniversityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of the national entrance examination (concours) for a school.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContestStatus {
    Launched,
    NotLaunched,
    Closed,
    ResultsPublished,
}

impl ContestStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Launched => "Launched",
            Self::NotLaunched => "Not launched",
            Self::Closed => "Closed",
            Self::ResultsPublished => "Results published",
        }
    }

    /// CSS modifier used by status badges.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Launched => "launched",
            Self::NotLaunched => "not-launched",
            Self::Closed => "closed",
            Self::ResultsPublished => "results-published",
        }
    }
}

// =============================================================================
// LICENSE SET
// =============================================================================

/// Bachelor (licence) degrees that give access to a specialty.
///
/// Deserializes from either `"Licence en X"` or `["Licence en X", ...]`.
/// Blank entries are dropped and surrounding whitespace trimmed. Always
/// serializes as a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LicenseSet(Vec<String>);

impl LicenseSet {
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|entry| {
                    let entry: String = entry.into();
                    entry.trim().to_owned()
                })
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if any entry contains `needle`, ignoring case. A blank needle
    /// matches nothing.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.0.iter().any(|entry| entry.to_lowercase().contains(&needle))
    }
}

impl<'de> Deserialize<'de> for LicenseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(single) => Self::new([single]),
            Raw::Many(list) => Self::new(list),
        })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One admission track of a school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailedSpecialty {
    pub name: String,
    /// Unique across the whole catalog.
    pub code: String,
    pub license: LicenseSet,
    /// Number of seats.
    pub capacity: u32,
    /// Previous year's admission cutoff.
    pub last_acceptable_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyScore {
    pub code: String,
    pub score: f64,
}

/// Summary of the previous admission round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastYearScores {
    pub year: u16,
    pub detailed_scores: Vec<SpecialtyScore>,
}

impl LastYearScores {
    #[must_use]
    pub fn score_for(&self, code: &str) -> Option<f64> {
        self.detailed_scores
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.score)
    }

    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.detailed_scores.iter().map(|s| s.score).reduce(f64::min)
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.detailed_scores.iter().map(|s| s.score).reduce(f64::max)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        if self.detailed_scores.is_empty() {
            return None;
        }
        let sum: f64 = self.detailed_scores.iter().map(|s| s.score).sum();
        Some(sum / self.detailed_scores.len() as f64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// An engineering school in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    /// Short name, e.g. `"ENIT"`.
    pub name: String,
    pub full_name: String,
    /// City.
    pub location: String,
    #[serde(rename = "type")]
    pub kind: UniversityType,
    /// Plain-text specialty labels used by search and the specialty selector.
    pub specialties: Vec<String>,
    pub detailed_specialties: Vec<DetailedSpecialty>,
    pub last_year_scores: LastYearScores,
    pub contest_status: ContestStatus,
    /// National ranking; `None` sorts last.
    #[serde(default)]
    pub ranking: Option<u32>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub founded: Option<u16>,
    #[serde(default)]
    pub student_count: Option<u32>,
}

impl University {
    /// Ranking used for ordering; unranked schools map to [`UNRANKED_SENTINEL`].
    #[must_use]
    pub fn ranking_key(&self) -> u32 {
        self.ranking.unwrap_or(UNRANKED_SENTINEL)
    }

    #[must_use]
    pub fn specialty(&self, code: &str) -> Option<&DetailedSpecialty> {
        self.detailed_specialties.iter().find(|s| s.code == code)
    }

    #[must_use]
    pub fn has_specialty_label(&self, label: &str) -> bool {
        self.specialties.iter().any(|s| s == label)
    }

    #[must_use]
    pub fn total_capacity(&self) -> u32 {
        self.detailed_specialties.iter().map(|s| s.capacity).sum()
    }
}
