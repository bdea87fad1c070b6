//! Read-only university catalog API.
//!
//! The catalog is bundled with the binary and shared through `AppState`.
//! Handlers serialize borrowed records straight into the response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use models::admission::{compare_all, parse_score};
use models::search::{self, UniversityFilter};
use models::{DetailedSpecialty, University};
use serde::{Deserialize, Serialize};

use super::api_error;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// `GET /api/universities`: filtered and sorted by ranking.
pub async fn list(State(state): State<AppState>, Query(params): Query<ListParams>) -> Response {
    let filter = UniversityFilter::from_selectors(&params.q, &params.specialty, &params.kind);
    Json(search::filter_universities(state.catalog.universities(), &filter)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct LicenseParams {
    #[serde(default)]
    pub license: String,
}

#[derive(Debug, Serialize)]
pub struct LicenseMatchBody<'a> {
    pub university: &'a University,
    pub specialties: Vec<&'a DetailedSpecialty>,
}

/// `GET /api/universities/licenses?license=`: specialties open to a license.
pub async fn by_license(State(state): State<AppState>, Query(params): Query<LicenseParams>) -> Response {
    let matches: Vec<LicenseMatchBody<'_>> = search::get_universities_by_license(state.catalog.universities(), &params.license)
        .into_iter()
        .map(|m| LicenseMatchBody { university: m.university, specialties: m.specialties })
        .collect();
    Json(matches).into_response()
}

/// `GET /api/universities/:id`
pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(university) => Json(university).into_response(),
        None => api_error(StatusCode::NOT_FOUND, &"university not found"),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChanceParams {
    #[serde(default)]
    pub score: String,
}

/// `GET /api/universities/:id/chances?score=`: admission tier per specialty.
pub async fn chances(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ChanceParams>,
) -> Response {
    let Some(university) = state.catalog.get(&id) else {
        return api_error(StatusCode::NOT_FOUND, &"university not found");
    };
    let Some(score) = parse_score(&params.score) else {
        return api_error(StatusCode::BAD_REQUEST, &"score must be a non-negative number");
    };
    Json(compare_all(university, score)).into_response()
}

#[cfg(test)]
#[path = "universities_test.rs"]
mod tests;
