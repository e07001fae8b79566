use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use super::TestApp;

fn singles(opponent: &str, sets: Value) -> Value {
    json!({
        "matchDate": "2024-03-09",
        "matchType": "women_singles",
        "player2Id": opponent,
        "sets": sets
    })
}

pub(super) async fn test_match_flow(app: &TestApp) {
    let ana = app.register("u1", "Ana", "female").await;
    let ben = app.register("u2", "Ben", "male").await;

    let id = app.record_win(&ana, "u2", "2024-03-02").await;

    let (status, body) = app.get(&format!("/matches/{id}"), Some(&ben)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player1Id"], "u1");
    assert_eq!(body["player1Score"], 13);
    assert_eq!(body["player2Score"], 9);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["sets"][1]["tiebreak"]["player2Score"], 2);

    let (status, body) = app
        .send(
            Method::POST,
            "/matches/schedule",
            Some(&ben),
            Some(json!({ "matchDate": "2024-03-30", "matchType": "mixed_singles", "player2Id": "u1" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["sets"], json!([]));

    let (status, body) = app.get("/matches?month=2024-03", Some(&ana)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, body) = app
        .get("/matches?month=2024-03&status=completed&participant=u2", Some(&ana))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], id.as_str());

    let (status, _) = app.get("/matches?month=2024-3x", Some(&ana)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Ben played in the match but neither created nor leads it
    let (status, _) = app.send(Method::DELETE, &format!("/matches/{id}"), Some(&ben), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send(Method::DELETE, &format!("/matches/{id}"), Some(&ana), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/matches/{id}"), Some(&ana)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/matches?month=2024-03", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

pub(super) async fn test_scorecard_validation(app: &TestApp) {
    let ana = app.token("u1");

    let cases = [
        // no sets
        singles("u2", json!([])),
        // tiebreak on a set that did not reach 7-6
        singles(
            "u2",
            json!([{ "player1Score": 6, "player2Score": 3, "tiebreak": { "player1Score": 7, "player2Score": 5 } }]),
        ),
        // negative games
        singles("u2", json!([{ "player1Score": -1, "player2Score": 6 }])),
        // singles with a partner
        json!({
            "matchDate": "2024-03-09",
            "matchType": "men_singles",
            "player2Id": "u2",
            "teammateId": "u3",
            "sets": [{ "player1Score": 6, "player2Score": 1 }]
        }),
    ];
    for case in cases {
        let (status, body) = app.send(Method::POST, "/matches", Some(&ana), Some(case)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    }

    // well formed but naming a stranger or the caller twice
    for opponent in ["ghost", "u1"] {
        let (status, body) = app
            .send(
                Method::POST,
                "/matches",
                Some(&ana),
                Some(singles(opponent, json!([{ "player1Score": 6, "player2Score": 1 }]))),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }

    // a missing field never reaches validation
    let (status, _) = app
        .send(
            Method::POST,
            "/matches",
            Some(&ana),
            Some(json!({ "matchType": "men_singles", "player2Id": "u2", "sets": [] })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
