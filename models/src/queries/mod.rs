use serde::Deserialize;
use utoipa::IntoParams;

use crate::domains::sea_orm_active_enums::MatchStatus;
use crate::schemas::leaderboard::{RankingStrategy, RosterView};

pub mod user;

/// `month` is always `YYYY-MM`; an absent month means the current one.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MatchQuery {
    pub month: Option<String>,
    pub participant: Option<String>,
    pub status: Option<MatchStatus>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    pub month: Option<String>,
    pub ranking: Option<RankingStrategy>,
    pub roster: Option<RosterView>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatisticsQuery {
    pub month: Option<String>,
}
