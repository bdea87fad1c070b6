//! The bundled university catalog.
//!
//! DESIGN
//! ======
//! The catalog is a small, fixed list parsed once from JSON embedded at compile
//! time. Parsing validates identity invariants (unique school ids, unique
//! specialty codes); cross-field consistency between `detailed_specialties`
//! and `last_year_scores` is reported by [`Catalog::consistency_issues`]
//! rather than rejected, since the source data never enforced it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use std::collections::HashSet;

use crate::university::University;

const BUNDLED_CATALOG: &str = include_str!("../data/universities.json");

/// Two scores closer than this are considered equal.
const SCORE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate university id: {0}")]
    DuplicateId(String),
    #[error("duplicate specialty code: {0}")]
    DuplicateSpecialtyCode(String),
}

/// A disagreement between a school's specialty list and its score summary.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsistencyIssue {
    /// A detailed specialty has no entry in `last_year_scores`.
    MissingScore { university: String, code: String },
    /// A score entry references a code with no detailed specialty.
    OrphanScore { university: String, code: String },
    /// Both sides exist but disagree on the cutoff.
    ScoreMismatch { university: String, code: String, specialty_score: f64, summary_score: f64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    universities: Vec<University>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate university ids or specialty codes.
    pub fn new(universities: Vec<University>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();
        for university in &universities {
            if !ids.insert(university.id.as_str()) {
                return Err(CatalogError::DuplicateId(university.id.clone()));
            }
            for specialty in &university.detailed_specialties {
                if !codes.insert(specialty.code.as_str()) {
                    return Err(CatalogError::DuplicateSpecialtyCode(specialty.code.clone()));
                }
            }
        }
        Ok(Self { universities })
    }

    /// Parse a catalog from a JSON array of universities.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or an identity error
    /// from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let universities: Vec<University> = serde_json::from_str(json)?;
        Self::new(universities)
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Every mismatch between `detailed_specialties` and
    /// `last_year_scores.detailed_scores`, in catalog order.
    #[must_use]
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();
        for university in &self.universities {
            for specialty in &university.detailed_specialties {
                match university.last_year_scores.score_for(&specialty.code) {
                    None => issues.push(ConsistencyIssue::MissingScore {
                        university: university.id.clone(),
                        code: specialty.code.clone(),
                    }),
                    Some(summary) if (summary - specialty.last_acceptable_score).abs() > SCORE_TOLERANCE => {
                        issues.push(ConsistencyIssue::ScoreMismatch {
                            university: university.id.clone(),
                            code: specialty.code.clone(),
                            specialty_score: specialty.last_acceptable_score,
                            summary_score: summary,
                        });
                    }
                    Some(_) => {}
                }
            }
            for score in &university.last_year_scores.detailed_scores {
                if university.specialty(&score.code).is_none() {
                    issues.push(ConsistencyIssue::OrphanScore {
                        university: university.id.clone(),
                        code: score.code.clone(),
                    });
                }
            }
        }
        issues
    }
}
