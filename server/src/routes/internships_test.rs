use super::*;

#[test]
fn post_errors_map_to_statuses() {
    assert_eq!(post_error_to_status(&PostError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(post_error_to_status(&PostError::MissingExternalId), StatusCode::BAD_REQUEST);
    assert_eq!(
        post_error_to_status(&PostError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn list_params_parse_from_query_string() {
    let params: ListParams = parse_params("page=2&per_page=20&q=data&category=Software");
    assert_eq!(params.page, Some(2));
    assert_eq!(params.per_page, Some(20));
    assert_eq!(params.q.as_deref(), Some("data"));
    assert_eq!(params.category.as_deref(), Some("Software"));
}

#[test]
fn list_params_all_optional() {
    let params: ListParams = parse_params("");
    assert!(params.page.is_none());
    assert!(params.category.is_none());
}

fn parse_params(raw: &str) -> ListParams {
    let uri: axum::http::Uri = format!("/api/internships?{raw}").parse().unwrap();
    Query::<ListParams>::try_from_uri(&uri).unwrap().0
}

#[tokio::test]
async fn post_error_response_has_json_body() {
    let response = post_error_response(PostError::NotFound);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(crate::routes::tests::body_json(response).await["error"], "post not found");
}
