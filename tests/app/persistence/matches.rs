use sea_orm::DatabaseConnection;

use app::core::DateWindow;
use app::error::{MatchError, WindowError};
use app::persistence::matches::{
    create_match, delete_match, get_match, matches_in_window, schedule_match, search_matches,
    update_match,
};
use models::domains::matches::SetScore;
use models::domains::sea_orm_active_enums::{MatchStatus, MatchType};
use models::params::matches::{CreateMatchParams, ScheduleMatchParams, UpdateMatchParams};
use models::queries::MatchQuery;
use models::schemas::user::CurrentUser;

use super::{date, record_singles};

fn match_error(err: &anyhow::Error) -> Option<&MatchError> {
    err.downcast_ref::<MatchError>()
}

fn schedule(opponent: &str, day: chrono::NaiveDate) -> ScheduleMatchParams {
    ScheduleMatchParams {
        match_date: day,
        match_type: MatchType::MixedSingles,
        player2_id: opponent.to_string(),
        teammate_id: None,
        opponent2_id: None,
    }
}

pub(super) async fn test_create_match(db: &DatabaseConnection, club: &[CurrentUser]) {
    let ana = &club[0];
    let record = record_singles(
        db,
        ana,
        "u2",
        date(2024, 3, 9),
        vec![SetScore::new(6, 3), SetScore::new(7, 6).with_tiebreak(7, 4)],
    )
    .await;

    assert_eq!(record.player1_id, "u1");
    assert_eq!(record.created_by, "u1");
    assert_eq!(record.status, MatchStatus::Completed);
    assert_eq!((record.player1_score, record.player2_score), (13, 9));

    let stored = get_match(db, &record.id).await.unwrap().expect("match stored");
    assert_eq!(stored.sets.0.len(), 2);
    assert_eq!(stored.sets.0[1].tiebreak.map(|tb| tb.player1_score), Some(7));
}

pub(super) async fn test_create_match_rejects_bad_lineups(
    db: &DatabaseConnection,
    club: &[CurrentUser],
) {
    let ana = &club[0];
    let params = |match_type, player2: &str, teammate: Option<&str>, opponent2: Option<&str>| {
        CreateMatchParams {
            match_date: date(2024, 3, 9),
            match_type,
            player2_id: player2.to_string(),
            teammate_id: teammate.map(str::to_string),
            opponent2_id: opponent2.map(str::to_string),
            sets: vec![SetScore::new(6, 2)],
        }
    };

    let cases = [
        params(MatchType::WomenSingles, "ghost", None, None),
        params(MatchType::WomenSingles, "u1", None, None),
        params(MatchType::MenDoubles, "u2", Some("u3"), None),
        params(MatchType::MixedDoubles, "u2", Some("u3"), Some("u1")),
    ];
    for case in cases {
        let err = create_match(db, ana, case).await.unwrap_err();
        assert!(
            matches!(match_error(&err), Some(MatchError::InvalidParticipants(_))),
            "unexpected error: {err}"
        );
    }
}

pub(super) async fn test_schedule_match(db: &DatabaseConnection, club: &[CurrentUser]) {
    let dev = &club[3];
    let record = schedule_match(db, dev, schedule("u2", date(2024, 6, 1)))
        .await
        .unwrap();

    assert_eq!(record.status, MatchStatus::Pending);
    assert!(record.sets.is_empty());
    assert_eq!((record.player1_score, record.player2_score), (0, 0));

    let june = DateWindow::month(2024, 6).unwrap();
    assert!(matches_in_window(db, &june).await.unwrap().is_empty());
}

pub(super) async fn test_update_and_delete_match(db: &DatabaseConnection, club: &[CurrentUser]) {
    let ana = &club[0];
    let record = record_singles(db, ana, "u2", date(2024, 7, 3), vec![SetScore::new(6, 4)]).await;

    let update = |sets: Vec<SetScore>, status: Option<MatchStatus>| UpdateMatchParams {
        match_date: date(2024, 7, 4),
        match_type: MatchType::MixedSingles,
        player1_id: "u2".to_string(),
        teammate_id: None,
        player2_id: "u3".to_string(),
        opponent2_id: None,
        sets,
        status,
    };

    let updated = update_match(db, &record.id, update(vec![SetScore::new(6, 0), SetScore::new(6, 1)], None))
        .await
        .unwrap();
    assert_eq!(updated.player1_id, "u2");
    assert_eq!(updated.player2_id, "u3");
    assert_eq!(updated.match_date, date(2024, 7, 4));
    assert_eq!((updated.player1_score, updated.player2_score), (12, 1));
    assert_eq!(updated.status, MatchStatus::Completed);
    // the creator is kept
    assert_eq!(updated.created_by, "u1");

    let cancelled = update_match(db, &record.id, update(vec![], Some(MatchStatus::Cancelled)))
        .await
        .unwrap();
    assert_eq!(cancelled.status, MatchStatus::Cancelled);
    assert_eq!((cancelled.player1_score, cancelled.player2_score), (0, 0));

    let err = update_match(db, "missing", update(vec![], None)).await.unwrap_err();
    assert_eq!(match_error(&err), Some(&MatchError::NotFound));

    delete_match(db, &record.id).await.unwrap();
    assert!(get_match(db, &record.id).await.unwrap().is_none());
    let err = delete_match(db, &record.id).await.unwrap_err();
    assert_eq!(match_error(&err), Some(&MatchError::NotFound));
}

pub(super) async fn test_search_matches(db: &DatabaseConnection, club: &[CurrentUser]) {
    let (ana, ben, cleo, dev) = (&club[0], &club[1], &club[2], &club[3]);
    let sets = vec![SetScore::new(6, 4)];

    let m1 = record_singles(db, ana, "u2", date(2024, 3, 2), sets.clone()).await;
    let m2 = record_singles(db, cleo, "u4", date(2024, 3, 15), sets.clone()).await;
    let m3 = record_singles(db, ana, "u4", date(2024, 3, 20), sets.clone()).await;
    let m4 = record_singles(db, ben, "u3", date(2024, 4, 1), sets).await;
    let pending = schedule_match(db, dev, schedule("u2", date(2024, 3, 28)))
        .await
        .unwrap();

    let today = date(2024, 4, 15);
    let query = |month: Option<&str>, participant: Option<&str>, status, page, limit| MatchQuery {
        month: month.map(str::to_string),
        participant: participant.map(str::to_string),
        status,
        page,
        limit,
    };
    let ids = |page: &models::schemas::pagination::PaginatedData<models::schemas::matches::MatchSchema>| {
        page.data.iter().map(|m| m.id.clone()).collect::<Vec<_>>()
    };

    let first = search_matches(db, query(Some("2024-03"), None, None, Some(1), Some(3)), today)
        .await
        .unwrap();
    assert_eq!(first.total, 4);
    assert_eq!(ids(&first), [pending.id.clone(), m3.id.clone(), m2.id.clone()]);

    let second = search_matches(db, query(Some("2024-03"), None, None, Some(2), Some(3)), today)
        .await
        .unwrap();
    assert_eq!(ids(&second), [m1.id.clone()]);

    let completed = search_matches(
        db,
        query(Some("2024-03"), None, Some(MatchStatus::Completed), None, None),
        today,
    )
    .await
    .unwrap();
    assert_eq!(completed.total, 3);

    let dev_march = search_matches(db, query(Some("2024-03"), Some("u4"), None, None, None), today)
        .await
        .unwrap();
    assert_eq!(ids(&dev_march), [pending.id.clone(), m3.id.clone(), m2.id.clone()]);

    let current = search_matches(db, query(None, None, None, None, None), today)
        .await
        .unwrap();
    assert_eq!(ids(&current), [m4.id.clone()]);

    let err = search_matches(db, query(Some("2024-13"), None, None, None, None), today)
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<WindowError>().is_some());

    let march = DateWindow::month(2024, 3).unwrap();
    let counted: Vec<String> = matches_in_window(db, &march)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(counted, [m3.id, m2.id, m1.id]);
}
