//! Search and filter projections over the university catalog.
//!
//! Every function here is a pure, synchronous projection over a slice of
//! records; results borrow from the input and preserve its order unless noted.

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

use std::collections::BTreeSet;

use crate::university::{DetailedSpecialty, University, UniversityType};

/// Specialty selector value meaning "no specialty filter".
pub const ALL_SPECIALTIES: &str = "All Specialties";
/// Type selector value meaning "no type filter".
pub const ALL_TYPES: &str = "All Types";

/// Combined directory filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniversityFilter {
    pub query: String,
    /// Exact specialty label; `None` means all.
    pub specialty: Option<String>,
    pub kind: Option<UniversityType>,
}

impl UniversityFilter {
    /// Build a filter from raw selector values as the UI presents them.
    ///
    /// Blank values and the `All ...` sentinels disable their filter; an
    /// unknown type value also disables the type filter.
    #[must_use]
    pub fn from_selectors(query: &str, specialty: &str, kind: &str) -> Self {
        let specialty = specialty.trim();
        let specialty = (!specialty.is_empty() && specialty != ALL_SPECIALTIES).then(|| specialty.to_owned());
        let kind = match kind.trim() {
            "" | ALL_TYPES => None,
            other => UniversityType::parse(other),
        };
        Self { query: query.trim().to_owned(), specialty, kind }
    }

    #[must_use]
    pub fn matches(&self, university: &University) -> bool {
        matches_query(university, &self.query)
            && self
                .specialty
                .as_deref()
                .map_or(true, |s| university.has_specialty_label(s))
            && self.kind.map_or(true, |k| university.kind == k)
    }
}

/// Case-insensitive substring match against name, full name, location and
/// specialty labels. A blank query matches everything.
#[must_use]
pub fn matches_query(university: &University, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&university.name, &university.full_name, &university.location]
        .into_iter()
        .chain(university.specialties.iter())
        .any(|field| field.to_lowercase().contains(&needle))
}

#[must_use]
pub fn search_universities<'a>(universities: &'a [University], query: &str) -> Vec<&'a University> {
    universities.iter().filter(|u| matches_query(u, query)).collect()
}

/// Schools whose `specialties` contain `specialty` exactly.
/// [`ALL_SPECIALTIES`] returns the whole list.
#[must_use]
pub fn get_universities_by_specialty<'a>(universities: &'a [University], specialty: &str) -> Vec<&'a University> {
    if specialty == ALL_SPECIALTIES {
        return universities.iter().collect();
    }
    universities
        .iter()
        .filter(|u| u.has_specialty_label(specialty))
        .collect()
}

/// [`ALL_TYPES`] returns the whole list; an unknown type value returns nothing.
#[must_use]
pub fn get_universities_by_type<'a>(universities: &'a [University], kind: &str) -> Vec<&'a University> {
    if kind == ALL_TYPES {
        return universities.iter().collect();
    }
    let Some(kind) = UniversityType::parse(kind) else {
        return Vec::new();
    };
    universities.iter().filter(|u| u.kind == kind).collect()
}

/// Apply `filter` and sort by ascending ranking, unranked last.
#[must_use]
pub fn filter_universities<'a>(universities: &'a [University], filter: &UniversityFilter) -> Vec<&'a University> {
    let mut out: Vec<&University> = universities.iter().filter(|u| filter.matches(u)).collect();
    sort_by_ranking(&mut out);
    out
}

/// Stable sort by [`University::ranking_key`].
pub fn sort_by_ranking(universities: &mut [&University]) {
    universities.sort_by_key(|u| u.ranking_key());
}

/// A school together with the specialties reachable from a given licence.
#[derive(Clone, Debug, PartialEq)]
pub struct LicenseMatch<'a> {
    pub university: &'a University,
    pub specialties: Vec<&'a DetailedSpecialty>,
}

/// For each school, the specialties whose licence set contains `license`
/// (case-insensitive substring). Schools with no such specialty are omitted.
#[must_use]
pub fn get_universities_by_license<'a>(universities: &'a [University], license: &str) -> Vec<LicenseMatch<'a>> {
    universities
        .iter()
        .filter_map(|university| {
            let specialties: Vec<&DetailedSpecialty> = university
                .detailed_specialties
                .iter()
                .filter(|s| s.license.contains_ignore_case(license))
                .collect();
            (!specialties.is_empty()).then_some(LicenseMatch { university, specialties })
        })
        .collect()
}

/// Sorted, deduplicated specialty labels for the selector.
#[must_use]
pub fn all_specialties(universities: &[University]) -> Vec<String> {
    universities
        .iter()
        .flat_map(|u| u.specialties.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated licence names across all detailed specialties.
#[must_use]
pub fn all_licenses(universities: &[University]) -> Vec<String> {
    universities
        .iter()
        .flat_map(|u| u.detailed_specialties.iter())
        .flat_map(|s| s.license.iter().map(str::to_owned))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
