use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::matches::{self, SetScore};
use crate::domains::sea_orm_active_enums::{MatchStatus, MatchType};

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSchema {
    pub id: String,
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    pub player1_id: String,
    pub teammate_id: Option<String>,
    pub player2_id: String,
    pub opponent2_id: Option<String>,
    pub player1_score: i64,
    pub player2_score: i64,
    pub status: MatchStatus,
    pub sets: Vec<SetScore>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<matches::Model> for MatchSchema {
    fn from(m: matches::Model) -> Self {
        Self {
            id: m.id,
            match_date: m.match_date,
            match_type: m.match_type,
            player1_id: m.player1_id,
            teammate_id: m.teammate_id,
            player2_id: m.player2_id,
            opponent2_id: m.opponent2_id,
            player1_score: m.player1_score,
            player2_score: m.player2_score,
            status: m.status,
            sets: m.sets.0,
            created_by: m.created_by,
            created_at: m.created_at.to_utc(),
        }
    }
}
