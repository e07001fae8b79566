use axum::http::StatusCode;

use super::TestApp;

pub(super) async fn test_leaderboard_and_statistics(app: &TestApp) {
    let ana = app.register("u1", "Ana", "female").await;
    let ben = app.register("u2", "Ben", "male").await;
    let cleo = app.register("u3", "Cleo", "female").await;

    app.record_win(&ana, "u2", "2024-03-02").await;
    app.record_win(&cleo, "u2", "2024-03-10").await;
    app.record_win(&ben, "u1", "2024-03-21").await;
    app.record_win(&ana, "u3", "2024-04-01").await;

    let (status, body) = app.get("/leaderboard?month=2024-03", Some(&ana)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"], "points");
    assert_eq!(body["window"]["start"], "2024-03-01");
    assert_eq!(body["window"]["end"], "2024-03-31");
    assert_eq!(body["skippedMatches"], 0);

    // Ben: 9 + 9 + 13 = 31, Ana: 13 + 9 = 22, Cleo: 13
    let entries = body["entries"].as_array().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e["userId"].as_str().unwrap()).collect();
    assert_eq!(ids, ["u2", "u1", "u3"]);
    assert_eq!(entries[0]["totalPoints"], 31);
    assert_eq!(entries[0]["losses"], 2);
    assert_eq!(entries[1]["displayName"], "Ana");

    let (status, body) = app
        .get("/leaderboard?month=2024-03&ranking=win_rate", Some(&ben))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"], "win_rate");
    let ids: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["userId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["u3", "u1", "u2"]);

    // members never see the full roster
    app.register("u4", "Dev", "male").await;
    let (_, body) = app.get("/leaderboard?month=2024-03&roster=full", Some(&ana)).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);

    let (status, _) = app.get("/leaderboard?month=13-2024", Some(&ana)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/leaderboard?ranking=elo", Some(&ana)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string(), "{body}");

    let (status, body) = app.get("/matches?page=first", Some(&ana)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string(), "{body}");

    let (status, body) = app.get("/statistics/me?month=2024-03", Some(&ben)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "u2");
    assert_eq!(body["totalMatches"], 3);
    assert_eq!(body["wonMatches"], 1);
    assert_eq!(body["lostMatches"], 2);
    assert_eq!(body["matches"].as_array().unwrap().len(), 3);
    assert_eq!(body["matches"][0]["matchDate"], "2024-03-21");
    assert_eq!(body["matches"][0]["result"], "won");
    // seen from Ben's side of a match Ana entered
    assert_eq!(body["matches"][2]["sets"][0]["player1Score"], 3);
    assert_eq!(body["matches"][2]["result"], "lost");

    let (status, body) = app.get("/statistics/u1?month=2024-04", Some(&ben)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wonMatches"], 1);
    assert_eq!(body["winRatePercent"], 100.0);

    let (status, _) = app.get("/statistics/ghost?month=2024-03", Some(&ben)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
