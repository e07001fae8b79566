use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use models::domains::matches::{self, MatchSets};
use models::domains::sea_orm_active_enums::{MatchStatus, MatchType};
use models::domains::users;
use models::params::matches::{
    CreateMatchParams, ScheduleMatchParams, UpdateMatchParams, check_lineup,
};
use models::queries::MatchQuery;
use models::schemas::matches::MatchSchema;
use models::schemas::pagination::PaginatedData;
use models::schemas::user::CurrentUser;

use crate::core::DateWindow;
use crate::error::MatchError;

const DEFAULT_PAGE_SIZE: u64 = 15;
const MAX_PAGE_SIZE: u64 = 100;

struct Lineup<'a> {
    match_type: MatchType,
    player1: &'a str,
    teammate: Option<&'a str>,
    player2: &'a str,
    opponent2: Option<&'a str>,
}

impl Lineup<'_> {
    fn ids(&self) -> Vec<&str> {
        [Some(self.player1), self.teammate, Some(self.player2), self.opponent2]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Slot rules plus a roster lookup for every named player.
async fn check_players(db: &DbConn, lineup: &Lineup<'_>) -> anyhow::Result<()> {
    check_lineup(
        lineup.match_type,
        Some(lineup.player1),
        lineup.teammate,
        lineup.player2,
        lineup.opponent2,
    )
    .map_err(|e| MatchError::InvalidParticipants(e.to_string()))?;

    let ids = lineup.ids();
    let known: Vec<String> = users::Entity::find()
        .filter(users::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();

    let missing: Vec<&str> = ids
        .into_iter()
        .filter(|id| !known.iter().any(|k| k.as_str() == *id))
        .collect();
    if !missing.is_empty() {
        return Err(
            MatchError::InvalidParticipants(format!("unknown player {}", missing.join(", "))).into(),
        );
    }
    Ok(())
}

/// Records a finished match. The creator always plays on side A.
pub async fn create_match(
    db: &DbConn,
    creator: &CurrentUser,
    params: CreateMatchParams,
) -> anyhow::Result<matches::Model> {
    check_players(
        db,
        &Lineup {
            match_type: params.match_type,
            player1: &creator.id,
            teammate: params.teammate_id.as_deref(),
            player2: &params.player2_id,
            opponent2: params.opponent2_id.as_deref(),
        },
    )
    .await?;

    let sets = MatchSets::from(params.sets);
    let (player1_score, player2_score) = sets.totals();

    let record = matches::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        match_date: Set(params.match_date),
        match_type: Set(params.match_type),
        player1_id: Set(creator.id.clone()),
        teammate_id: Set(params.teammate_id),
        player2_id: Set(params.player2_id),
        opponent2_id: Set(params.opponent2_id),
        player1_score: Set(player1_score),
        player2_score: Set(player2_score),
        status: Set(MatchStatus::Completed),
        sets: Set(sets),
        created_by: Set(creator.id.clone()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::info!(match_id = %record.id, created_by = %record.created_by, "match recorded");
    Ok(record)
}

/// Books a future match without scores.
pub async fn schedule_match(
    db: &DbConn,
    creator: &CurrentUser,
    params: ScheduleMatchParams,
) -> anyhow::Result<matches::Model> {
    check_players(
        db,
        &Lineup {
            match_type: params.match_type,
            player1: &creator.id,
            teammate: params.teammate_id.as_deref(),
            player2: &params.player2_id,
            opponent2: params.opponent2_id.as_deref(),
        },
    )
    .await?;

    let record = matches::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        match_date: Set(params.match_date),
        match_type: Set(params.match_type),
        player1_id: Set(creator.id.clone()),
        teammate_id: Set(params.teammate_id),
        player2_id: Set(params.player2_id),
        opponent2_id: Set(params.opponent2_id),
        player1_score: Set(0),
        player2_score: Set(0),
        status: Set(MatchStatus::Pending),
        sets: Set(MatchSets::default()),
        created_by: Set(creator.id.clone()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::info!(match_id = %record.id, date = %record.match_date, "match scheduled");
    Ok(record)
}

pub async fn get_match(db: &DbConn, id: &str) -> Result<Option<matches::Model>, DbErr> {
    matches::Entity::find_by_id(id).one(db).await
}

/// One page of matches in the requested month (current month when absent),
/// newest first.
pub async fn search_matches(
    db: &DbConn,
    query: MatchQuery,
    today: NaiveDate,
) -> anyhow::Result<PaginatedData<MatchSchema>> {
    let window = DateWindow::month_or_current(query.month.as_deref(), today)?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let page = query.page.unwrap_or(1).max(1);

    let mut select = super::within(matches::Entity::find(), &window);
    if let Some(participant) = query.participant.as_deref() {
        select = select.filter(super::involving(participant));
    }
    if let Some(status) = query.status {
        select = select.filter(matches::Column::Status.eq(status));
    }

    let paginator = select
        .order_by_desc(matches::Column::MatchDate)
        .order_by_desc(matches::Column::CreatedAt)
        .paginate(db, limit);
    let total = paginator.num_items().await?;
    let data = paginator
        .fetch_page(page - 1)
        .await?
        .into_iter()
        .map(MatchSchema::from)
        .collect();

    Ok(PaginatedData::new(data, page, limit, total))
}

/// Administrative rewrite of a match. Totals are derived again from the sets
/// and the status is left alone unless one is given.
pub async fn update_match(
    db: &DbConn,
    id: &str,
    params: UpdateMatchParams,
) -> anyhow::Result<matches::Model> {
    let existing = get_match(db, id).await?.ok_or(MatchError::NotFound)?;

    check_players(
        db,
        &Lineup {
            match_type: params.match_type,
            player1: &params.player1_id,
            teammate: params.teammate_id.as_deref(),
            player2: &params.player2_id,
            opponent2: params.opponent2_id.as_deref(),
        },
    )
    .await?;

    let sets = MatchSets::from(params.sets);
    let (player1_score, player2_score) = sets.totals();
    let status = params.status.unwrap_or(existing.status);

    let mut record = existing.into_active_model();
    record.match_date = Set(params.match_date);
    record.match_type = Set(params.match_type);
    record.player1_id = Set(params.player1_id);
    record.teammate_id = Set(params.teammate_id);
    record.player2_id = Set(params.player2_id);
    record.opponent2_id = Set(params.opponent2_id);
    record.player1_score = Set(player1_score);
    record.player2_score = Set(player2_score);
    record.sets = Set(sets);
    record.status = Set(status);

    let record = record.update(db).await?;
    tracing::info!(match_id = %record.id, status = ?record.status, "match updated");
    Ok(record)
}

pub async fn delete_match(db: &DbConn, id: &str) -> anyhow::Result<()> {
    let result = matches::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatchError::NotFound.into());
    }
    tracing::info!(match_id = %id, "match deleted");
    Ok(())
}

/// Completed matches dated inside `window`, newest first.
pub async fn matches_in_window(
    db: &DbConn,
    window: &DateWindow,
) -> Result<Vec<matches::Model>, DbErr> {
    super::within(matches::Entity::find(), window)
        .filter(matches::Column::Status.eq(MatchStatus::Completed))
        .order_by_desc(matches::Column::MatchDate)
        .all(db)
        .await
}

/// Completed matches inside `window` that `user_id` played in.
pub async fn player_matches(
    db: &DbConn,
    user_id: &str,
    window: &DateWindow,
) -> Result<Vec<matches::Model>, DbErr> {
    super::within(matches::Entity::find(), window)
        .filter(matches::Column::Status.eq(MatchStatus::Completed))
        .filter(super::involving(user_id))
        .order_by_desc(matches::Column::MatchDate)
        .all(db)
        .await
}
