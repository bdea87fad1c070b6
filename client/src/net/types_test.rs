use super::*;

fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "2f9b0f5e-0000-4000-8000-000000000001",
        "email": "amira@example.com",
        "name": "Amira Ben Salah",
        "role": "admin",
        "university": "ENIT",
        "specialty": null,
        "bio": null,
        "phone": null,
        "has_avatar": true,
        "member_since": "2025-09-01"
    })
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_session_payload() {
    let user: User = serde_json::from_value(sample_user_json()).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.university.as_deref(), Some("ENIT"));
    assert!(user.has_avatar);
}

#[test]
fn user_defaults_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@b.c",
        "name": "A"
    }))
    .unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.has_avatar);
    assert!(user.member_since.is_none());
}

#[test]
fn avatar_url_only_when_uploaded() {
    let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
    assert_eq!(
        user.avatar_url(3).as_deref(),
        Some("/api/users/2f9b0f5e-0000-4000-8000-000000000001/avatar?v=3")
    );
    user.has_avatar = false;
    assert!(user.avatar_url(3).is_none());
}

#[test]
fn initials_take_first_two_words() {
    let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
    assert_eq!(user.initials(), "AB");
    user.name = "yasmine".to_owned();
    assert_eq!(user.initials(), "Y");
    user.name = "   ".to_owned();
    assert_eq!(user.initials(), "?");
}

#[test]
fn profile_form_prefills_from_user() {
    let user: User = serde_json::from_value(sample_user_json()).unwrap();
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.name, "Amira Ben Salah");
    assert_eq!(form.university.as_deref(), Some("ENIT"));
    assert!(form.bio.is_none());
}

// =============================================================
// Admin payloads
// =============================================================

#[test]
fn post_patch_omits_unchanged_fields() {
    let patch = PostPatch { category: Some("Software".to_owned()), title: None };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "category": "Software" }));
}

#[test]
fn scraper_status_deserializes_runs() {
    let status: ScraperStatus = serde_json::from_value(serde_json::json!({
        "running": true,
        "current_run": "r1",
        "feed_configured": true,
        "recent_runs": [{
            "id": "r1",
            "started_at": "2026-10-01T10:00:00Z",
            "finished_at": null,
            "status": "running",
            "fetched": 0,
            "inserted": 0,
            "error": null
        }]
    }))
    .unwrap();
    assert!(status.running);
    assert_eq!(status.recent_runs[0].status, RunStatus::Running);
    assert_eq!(RunStatus::Stopped.css_modifier(), "stopped");
}

#[test]
fn error_body_deserializes() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"email already registered"}"#).unwrap();
    assert_eq!(body.error, "email already registered");
}
