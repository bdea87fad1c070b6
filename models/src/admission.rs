//! Admission-chance heuristic for the score comparison panel.
//!
//! The candidate's score is compared with last year's cutoff for a specialty
//! and the difference is bucketed into four fixed tiers.

#[cfg(test)]
#[path = "admission_test.rs"]
mod tests;

use serde::Serialize;

use crate::university::{DetailedSpecialty, University};

const HIGH_THRESHOLD: f64 = 5.0;
const MEDIUM_THRESHOLD: f64 = 2.0;
const LOW_THRESHOLD: f64 = -2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceTier {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ChanceTier {
    /// Bucket a score difference. Total over all `f64`: anything that is not
    /// at least [`LOW_THRESHOLD`] (including NaN) is `VeryLow`.
    #[must_use]
    pub fn from_diff(score_diff: f64) -> Self {
        if score_diff >= HIGH_THRESHOLD {
            Self::High
        } else if score_diff >= MEDIUM_THRESHOLD {
            Self::Medium
        } else if score_diff >= LOW_THRESHOLD {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High chance",
            Self::Medium => "Medium chance",
            Self::Low => "Low chance",
            Self::VeryLow => "Very low chance",
        }
    }

    /// Progress-bar fill. Cosmetic only.
    #[must_use]
    pub fn percentage(self) -> u8 {
        match self {
            Self::High => 90,
            Self::Medium => 65,
            Self::Low => 35,
            Self::VeryLow => 10,
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very-low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AcceptanceChance {
    pub tier: ChanceTier,
    pub label: &'static str,
    pub percentage: u8,
    pub score_diff: f64,
}

#[must_use]
pub fn get_acceptance_chance(candidate_score: f64, last_acceptable_score: f64) -> AcceptanceChance {
    let score_diff = candidate_score - last_acceptable_score;
    let tier = ChanceTier::from_diff(score_diff);
    AcceptanceChance { tier, label: tier.label(), percentage: tier.percentage(), score_diff }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpecialtyChance<'a> {
    pub specialty: &'a DetailedSpecialty,
    pub chance: AcceptanceChance,
}

/// Chance for every detailed specialty of `university`, in catalog order.
#[must_use]
pub fn compare_all(university: &University, candidate_score: f64) -> Vec<SpecialtyChance<'_>> {
    university
        .detailed_specialties
        .iter()
        .map(|specialty| SpecialtyChance {
            specialty,
            chance: get_acceptance_chance(candidate_score, specialty.last_acceptable_score),
        })
        .collect()
}

/// Parse a user-entered score, accepting a comma decimal separator.
/// Returns `None` for blank, non-numeric, non-finite or negative input.
#[must_use]
pub fn parse_score(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}
