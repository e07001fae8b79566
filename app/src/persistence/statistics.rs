use chrono::NaiveDate;
use sea_orm::{DbConn, DbErr, EntityTrait};

use models::domains::users;
use models::queries::LeaderboardQuery;
use models::schemas::leaderboard::{LeaderboardSchema, PlayerStatistics, RosterView};

use crate::config::Config;
use crate::core::{DateWindow, MatchFilter, MatchRecord, UserRecord};
use crate::error::UserError;

use super::matches::{matches_in_window, player_matches};

/// Ranked leaderboard for the requested month (current month when absent).
pub async fn leaderboard(
    db: &DbConn,
    config: &Config,
    query: LeaderboardQuery,
    today: NaiveDate,
) -> anyhow::Result<LeaderboardSchema> {
    let window = DateWindow::month_or_current(query.month.as_deref(), today)?;
    let aggregator = config
        .stats_aggregator()
        .with_ranking(query.ranking.unwrap_or(config.ranking));

    let roster = load_roster(db).await?;
    let records: Vec<MatchRecord> = matches_in_window(db, &window)
        .await?
        .into_iter()
        .map(MatchRecord::from)
        .collect();

    let aggregation = aggregator.aggregate(&records, &roster, &MatchFilter::window(window));
    let skipped = aggregation.skipped();
    if skipped > 0 {
        tracing::warn!(
            skipped,
            start = ?window.start,
            end = ?window.end,
            "matches with unknown or repeated players left out of leaderboard"
        );
    }

    let entries = match query.roster.unwrap_or_default() {
        RosterView::Ranked => aggregation.into_leaderboard(),
        RosterView::Full => aggregation.into_roster(),
    };

    Ok(LeaderboardSchema {
        window: window.into(),
        ranking: aggregator.ranking(),
        entries,
        skipped_matches: skipped,
    })
}

/// Personal statistics of one member for a month (current month when absent).
pub async fn player_statistics(
    db: &DbConn,
    config: &Config,
    user_id: &str,
    month: Option<&str>,
    today: NaiveDate,
) -> anyhow::Result<PlayerStatistics> {
    let window = DateWindow::month_or_current(month, today)?;
    let roster = load_roster(db).await?;
    if !roster.iter().any(|u| u.id == user_id) {
        return Err(UserError::NotFound.into());
    }

    let records: Vec<MatchRecord> = player_matches(db, user_id, &window)
        .await?
        .into_iter()
        .map(MatchRecord::from)
        .collect();

    let stats = config.stats_aggregator().player_statistics(
        &records,
        &roster,
        user_id,
        &MatchFilter::window(window),
    );
    if stats.skipped_matches > 0 {
        tracing::warn!(
            user_id,
            skipped = stats.skipped_matches,
            "matches with unknown or repeated players left out of statistics"
        );
    }
    Ok(stats)
}

async fn load_roster(db: &DbConn) -> Result<Vec<UserRecord>, DbErr> {
    Ok(users::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(UserRecord::from)
        .collect())
}
