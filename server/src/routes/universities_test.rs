use super::*;
use crate::routes::tests::body_json;
use crate::state::test_helpers;

fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .map(|u| u["id"].as_str().unwrap_or_default().to_owned())
        .collect()
}

#[tokio::test]
async fn list_without_filters_returns_catalog_by_ranking() {
    let state = test_helpers::test_app_state();
    let body = body_json(list(State(state), Query(ListParams::default())).await).await;
    let ids = ids(&body);
    assert_eq!(ids.len(), 13);
    assert_eq!(ids.first().map(String::as_str), Some("enit"));
    assert_eq!(ids.last().map(String::as_str), Some("isims"));
}

#[tokio::test]
async fn list_combines_query_and_type() {
    let state = test_helpers::test_app_state();
    let params = ListParams { q: "sfax".into(), specialty: String::new(), kind: "independent".into() };
    let body = body_json(list(State(state), Query(params)).await).await;
    assert_eq!(ids(&body), vec!["enetcom".to_owned()]);
}

#[tokio::test]
async fn list_serializes_type_field() {
    let state = test_helpers::test_app_state();
    let params = ListParams { q: "enit".into(), ..ListParams::default() };
    let body = body_json(list(State(state), Query(params)).await).await;
    assert_eq!(body[0]["type"], "specific");
}

#[tokio::test]
async fn get_one_found_and_missing() {
    let state = test_helpers::test_app_state();
    let found = get_one(State(state.clone()), Path("enit".into())).await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_json(found).await["id"], "enit");

    let missing = get_one(State(state), Path("mit".into())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn by_license_omits_schools_without_matches() {
    let state = test_helpers::test_app_state();
    let params = LicenseParams { license: "génie civil".into() };
    let body = body_json(by_license(State(state), Query(params)).await).await;
    let matches = body.as_array().unwrap();
    assert!(!matches.is_empty());
    for m in matches {
        let specialties = m["specialties"].as_array().unwrap();
        assert!(!specialties.is_empty());
    }
    assert!(matches.iter().any(|m| m["university"]["id"] == "enit"));
}

#[tokio::test]
async fn by_license_blank_is_empty() {
    let state = test_helpers::test_app_state();
    let body = body_json(by_license(State(state), Query(LicenseParams::default())).await).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn chances_cover_every_specialty() {
    let state = test_helpers::test_app_state();
    let expected = state.catalog.get("enit").unwrap().detailed_specialties.len();
    let response = chances(State(state), Path("enit".into()), Query(ChanceParams { score: "150,5".into() })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), expected);
    // ENIT-GC cutoff is 152.40, so 150.5 is within two points below.
    let gc = rows.iter().find(|r| r["specialty"]["code"] == "ENIT-GC").unwrap();
    assert_eq!(gc["chance"]["tier"], "low");
}

#[tokio::test]
async fn chances_reject_bad_score_and_unknown_school() {
    let state = test_helpers::test_app_state();
    let bad = chances(State(state.clone()), Path("enit".into()), Query(ChanceParams { score: "abc".into() })).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let missing = chances(State(state), Path("nowhere".into()), Query(ChanceParams { score: "100".into() })).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chances_reject_blank_and_negative_scores() {
    let state = test_helpers::test_app_state();
    for score in ["", "   ", "-1", "NaN"] {
        let response = chances(State(state.clone()), Path("enit".into()), Query(ChanceParams { score: score.into() })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "score {score:?}");
    }
}

#[tokio::test]
async fn chances_at_cutoff_plus_two_is_medium() {
    let state = test_helpers::test_app_state();
    let response = chances(State(state), Path("enit".into()), Query(ChanceParams { score: "154.4".into() })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let gc = body.as_array().unwrap().iter().find(|r| r["specialty"]["code"] == "ENIT-GC").unwrap();
    assert_eq!(gc["chance"]["tier"], "medium");
}
