use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use api::setup_router;
use app::config::{Config, ConfigInner};
use app::utils::encode_identity;
use utils::testing::setup_test_db;

mod matches;
mod root;
mod statistics;

struct TestApp {
    router: Router,
    config: Config,
    db: DatabaseConnection,
}

impl TestApp {
    async fn new() -> Self {
        let db = setup_test_db().await.expect("Set up db failed!");
        let config = Config::new(ConfigInner::with_secret("sqlite::memory:", "api-test-secret"));
        let router = setup_router(config.clone(), db.clone()).expect("Set up router failed!");
        Self { router, config, db }
    }

    fn token(&self, subject: &str) -> String {
        encode_identity(&self.config, subject, Some(&format!("{subject}@club.test")))
            .expect("Token encoding failed!")
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    /// Creates the profile for `id` and returns a token for it.
    async fn register(&self, id: &str, name: &str, gender: &str) -> String {
        let token = self.token(id);
        let (status, body) = self
            .send(
                Method::POST,
                "/users/me",
                Some(&token),
                Some(json!({ "name": name, "email": format!("{id}@club.test"), "gender": gender })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        token
    }

    /// The token holder wins a singles match 13-9 on games. Returns the match id.
    async fn record_win(&self, token: &str, opponent: &str, match_date: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/matches",
                Some(token),
                Some(json!({
                    "matchDate": match_date,
                    "matchType": "mixed_singles",
                    "player2Id": opponent,
                    "sets": [
                        { "player1Score": 6, "player2Score": 3 },
                        { "player1Score": 7, "player2Score": 6, "tiebreak": { "player1Score": 7, "player2Score": 2 } }
                    ]
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn root_main() {
    let app = TestApp::new().await;

    root::test_health(&app).await;
    root::test_openapi_document(&app).await;
}

#[tokio::test]
async fn user_main() {
    let app = TestApp::new().await;

    user::test_profile_flow(&app).await;
    user::test_roster(&app).await;
}

#[tokio::test]
async fn match_main() {
    let app = TestApp::new().await;

    matches::test_match_flow(&app).await;
    matches::test_scorecard_validation(&app).await;
}

#[tokio::test]
async fn statistics_main() {
    let app = TestApp::new().await;

    statistics::test_leaderboard_and_statistics(&app).await;
}

#[tokio::test]
async fn admin_main() {
    let app = TestApp::new().await;

    admin::test_admin_gate(&app).await;
    admin::test_admin_operations(&app).await;
}
