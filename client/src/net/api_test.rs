use super::*;

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_server_text() {
    assert_eq!(error_message(409, r#"{"error":"email already registered"}"#), "email already registered");
}

#[test]
fn error_message_falls_back_on_status() {
    assert_eq!(error_message(401, ""), "Please sign in to continue.");
    assert_eq!(error_message(403, "not json"), "You do not have permission to do that.");
    assert_eq!(error_message(429, r#"{"error":"  "}"#), "Too many attempts. Please wait and try again.");
    assert_eq!(error_message(502, ""), "Something went wrong. Please try again.");
    assert_eq!(error_message(418, ""), "request failed: 418");
}

// =============================================================
// list_query
// =============================================================

#[test]
fn list_query_omits_blank_filters() {
    let params = list_query(2, &[("q", "  "), ("category", "Software")]);
    assert_eq!(params, vec![("page", "2".to_owned()), ("category", "Software".to_owned())]);
}

#[test]
fn list_query_trims_and_clamps_page() {
    let params = list_query(0, &[("q", " data ")]);
    assert_eq!(params, vec![("page", "1".to_owned()), ("q", "data".to_owned())]);
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(internship_endpoint("p1"), "/api/internships/p1");
    assert_eq!(admin_user_endpoint("u1"), "/api/admin/users/u1");
    assert_eq!(admin_post_endpoint("p1"), "/api/admin/posts/p1");
}

#[test]
fn status_filter_value_maps_all() {
    assert_eq!(status_filter_value(None), "all");
    assert_eq!(status_filter_value(Some(PostStatus::Flagged)), "flagged");
    assert_eq!(status_filter_value(Some(PostStatus::Published)), "published");
}
