use sea_orm::DatabaseConnection;

use app::error::UserError;
use app::persistence::matches::{get_match, schedule_match};
use app::persistence::users::{
    create_profile, delete_user, get_user, list_users, refresh_lifetime_counters, set_enabled,
    set_role, update_profile,
};
use models::domains::matches::SetScore;
use models::domains::sea_orm_active_enums::{Gender, MatchType, UserRole};
use models::params::matches::ScheduleMatchParams;
use models::params::user::{CreateProfileParams, UpdateProfileParams};
use models::queries::user::UserQuery;
use models::schemas::user::CurrentUser;

use super::{date, record_doubles, record_singles, seed_user, test_config};

fn user_error(err: &anyhow::Error) -> Option<&UserError> {
    err.downcast_ref::<UserError>()
}

pub(super) async fn test_profile_lifecycle(db: &DatabaseConnection) {
    let user = seed_user(db, "u1", "Ana", Gender::Female).await;
    assert_eq!(user.role, UserRole::User);
    assert!(user.is_enabled);
    assert_eq!((user.total_points, user.total_matches, user.won_matches), (0, 0, 0));

    let found = get_user(db, "u1").await.unwrap().expect("profile stored");
    assert_eq!(found.email, "u1@club.test");

    let user = update_profile(
        db,
        "u1",
        UpdateProfileParams {
            name: Some("  Ana Ruiz ".to_string()),
            gender: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(user.name, "Ana Ruiz");
    assert_eq!(user.gender, Gender::Female);

    let user = set_role(db, "u1", UserRole::Admin).await.unwrap();
    assert_eq!(user.role, UserRole::Admin);

    let user = set_enabled(db, "u1", false).await.unwrap();
    assert!(!user.is_enabled);

    let listed = list_users(
        db,
        UserQuery {
            name: Some("Ruiz".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "u1");

    let err = update_profile(db, "missing", UpdateProfileParams::default())
        .await
        .unwrap_err();
    assert_eq!(user_error(&err), Some(&UserError::NotFound));
}

pub(super) async fn test_duplicate_profiles(db: &DatabaseConnection) {
    let same_id = create_profile(
        db,
        "u1",
        CreateProfileParams {
            name: "Other".to_string(),
            email: "other@club.test".to_string(),
            gender: Gender::Male,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(user_error(&same_id), Some(&UserError::AlreadyExists));

    let same_email = create_profile(
        db,
        "u9",
        CreateProfileParams {
            name: "Other".to_string(),
            email: "u1@club.test".to_string(),
            gender: Gender::Male,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(user_error(&same_email), Some(&UserError::AlreadyExists));
    assert!(get_user(db, "u9").await.unwrap().is_none());
}

pub(super) async fn test_delete_user_removes_matches(db: &DatabaseConnection, club: &[CurrentUser]) {
    let (ana, ben, cleo) = (&club[0], &club[1], &club[2]);
    let day = date(2024, 3, 9);
    let sets = vec![SetScore::new(6, 4)];

    let singles = record_singles(db, ana, "u2", day, sets.clone()).await;
    let unrelated = record_singles(db, cleo, "u4", day, sets.clone()).await;
    let doubles = record_doubles(db, ben, ["u4", "u3", "u1"], day, sets).await;

    let removed = delete_user(db, "u1").await.unwrap();
    assert_eq!(removed, 2);

    assert!(get_user(db, "u1").await.unwrap().is_none());
    assert!(get_match(db, &singles.id).await.unwrap().is_none());
    assert!(get_match(db, &doubles.id).await.unwrap().is_none());
    assert!(get_match(db, &unrelated.id).await.unwrap().is_some());

    let err = delete_user(db, "u1").await.unwrap_err();
    assert_eq!(user_error(&err), Some(&UserError::NotFound));
}

pub(super) async fn test_refresh_lifetime_counters(db: &DatabaseConnection, club: &[CurrentUser]) {
    let (ana, ben, cleo, dev) = (&club[0], &club[1], &club[2], &club[3]);

    // Ana 12 - 7 Ben
    record_singles(
        db,
        ana,
        "u2",
        date(2024, 3, 2),
        vec![SetScore::new(6, 3), SetScore::new(6, 4)],
    )
    .await;
    // Ben 15 - 17 Cleo, Ben takes more sets but fewer games
    record_singles(
        db,
        ben,
        "u3",
        date(2024, 4, 10),
        vec![
            SetScore::new(6, 7).with_tiebreak(5, 7),
            SetScore::new(6, 4),
            SetScore::new(3, 6),
        ],
    )
    .await;
    // Cleo 10 - 10 Dev
    record_singles(
        db,
        cleo,
        "u4",
        date(2024, 4, 12),
        vec![SetScore::new(6, 4), SetScore::new(4, 6)],
    )
    .await;
    schedule_match(
        db,
        dev,
        ScheduleMatchParams {
            match_date: date(2024, 5, 1),
            match_type: MatchType::MixedSingles,
            player2_id: "u1".to_string(),
            teammate_id: None,
            opponent2_id: None,
        },
    )
    .await
    .unwrap();

    // cached counters are stale until refreshed
    let before = get_user(db, "u2").await.unwrap().unwrap();
    assert_eq!(before.total_matches, 0);

    let updated = refresh_lifetime_counters(db, &test_config()).await.unwrap();
    assert_eq!(updated, 4);

    let counters = |user: models::domains::users::Model| {
        (user.total_points, user.total_matches, user.won_matches)
    };
    assert_eq!(counters(get_user(db, "u1").await.unwrap().unwrap()), (12, 1, 1));
    assert_eq!(counters(get_user(db, "u2").await.unwrap().unwrap()), (22, 2, 0));
    assert_eq!(counters(get_user(db, "u3").await.unwrap().unwrap()), (27, 2, 1));
    assert_eq!(counters(get_user(db, "u4").await.unwrap().unwrap()), (10, 1, 0));
}
