use axum::http::StatusCode;

use super::TestApp;

pub(super) async fn test_health(app: &TestApp) {
    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

pub(super) async fn test_openapi_document(app: &TestApp) {
    let (status, body) = app.get("/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().expect("paths object");
    for path in ["/health", "/matches", "/leaderboard", "/statistics/{user_id}", "/admin/users/recompute"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}
