use super::*;

// =============================================================================
// LicenseSet
// =============================================================================

#[test]
fn license_set_deserializes_single_string_as_singleton() {
    let set: LicenseSet = serde_json::from_str(r#""Licence en Informatique""#).unwrap();
    assert_eq!(set.as_slice(), ["Licence en Informatique".to_owned()]);
}

#[test]
fn license_set_deserializes_list() {
    let set: LicenseSet = serde_json::from_str(r#"["Licence en Chimie", "Licence en Physique"]"#).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Licence en Chimie", "Licence en Physique"]);
}

#[test]
fn license_set_drops_blank_entries_and_trims() {
    let set: LicenseSet = serde_json::from_str(r#"["  Licence en Chimie ", "", "   "]"#).unwrap();
    assert_eq!(set.as_slice(), ["Licence en Chimie".to_owned()]);
}

#[test]
fn license_set_always_serializes_as_list() {
    let set: LicenseSet = serde_json::from_str(r#""Licence en Mécanique""#).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["Licence en Mécanique"]"#);
}

#[test]
fn license_set_rejects_non_string_shapes() {
    assert!(serde_json::from_str::<LicenseSet>("42").is_err());
    assert!(serde_json::from_str::<LicenseSet>(r#"{"a": 1}"#).is_err());
}

#[test]
fn contains_ignore_case_matches_substring() {
    let set = LicenseSet::new(["Licence en Informatique", "Licence en Génie Logiciel"]);
    assert!(set.contains_ignore_case("informatique"));
    assert!(set.contains_ignore_case("GÉNIE LOGICIEL"));
    assert!(!set.contains_ignore_case("chimie"));
}

#[test]
fn contains_ignore_case_blank_needle_matches_nothing() {
    let set = LicenseSet::new(["Licence en Informatique"]);
    assert!(!set.contains_ignore_case(""));
    assert!(!set.contains_ignore_case("   "));
}

// =============================================================================
// Enums
// =============================================================================

#[test]
fn university_type_wire_values() {
    assert_eq!(serde_json::to_string(&UniversityType::PedagogicalResource).unwrap(), r#""pedagogical-resource""#);
    for kind in UniversityType::ALL {
        assert_eq!(UniversityType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(UniversityType::parse("All Types"), None);
}

#[test]
fn contest_status_wire_values() {
    let status: ContestStatus = serde_json::from_str(r#""results-published""#).unwrap();
    assert_eq!(status, ContestStatus::ResultsPublished);
    let status: ContestStatus = serde_json::from_str(r#""not-launched""#).unwrap();
    assert_eq!(status, ContestStatus::NotLaunched);
    assert_eq!(ContestStatus::NotLaunched.label(), "Not launched");
}

// =============================================================================
// LastYearScores
// =============================================================================

fn scores(values: &[(&str, f64)]) -> LastYearScores {
    LastYearScores {
        year: 2024,
        detailed_scores: values
            .iter()
            .map(|(code, score)| SpecialtyScore { code: (*code).to_owned(), score: *score })
            .collect(),
    }
}

#[test]
fn last_year_scores_summary() {
    let s = scores(&[("A", 100.0), ("B", 120.0), ("C", 110.0)]);
    assert_eq!(s.min(), Some(100.0));
    assert_eq!(s.max(), Some(120.0));
    assert!((s.average().unwrap() - 110.0).abs() < 1e-9);
    assert_eq!(s.score_for("B"), Some(120.0));
    assert_eq!(s.score_for("Z"), None);
}

#[test]
fn last_year_scores_empty_summary_is_none() {
    let s = scores(&[]);
    assert_eq!(s.min(), None);
    assert_eq!(s.max(), None);
    assert_eq!(s.average(), None);
}

// =============================================================================
// University
// =============================================================================

#[test]
fn university_deserializes_with_optional_metadata_missing() {
    let json = r#"{
        "id": "x",
        "name": "X",
        "full_name": "École X",
        "location": "Tunis",
        "type": "independent",
        "specialties": ["Génie Civil"],
        "detailed_specialties": [
            {"name": "Génie Civil", "code": "X-GC", "license": "Licence en Génie Civil", "capacity": 10, "last_acceptable_score": 100.5}
        ],
        "last_year_scores": {"year": 2024, "detailed_scores": [{"code": "X-GC", "score": 100.5}]},
        "contest_status": "closed"
    }"#;
    let u: University = serde_json::from_str(json).unwrap();
    assert_eq!(u.kind, UniversityType::Independent);
    assert_eq!(u.ranking, None);
    assert_eq!(u.ranking_key(), UNRANKED_SENTINEL);
    assert!(u.images.is_empty());
    assert_eq!(u.total_capacity(), 10);
    assert!(u.specialty("X-GC").is_some());
    assert!(u.has_specialty_label("Génie Civil"));
    assert!(!u.has_specialty_label("génie civil"));
}
